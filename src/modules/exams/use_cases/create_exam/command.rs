#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateExam {
    pub exam_name: String,
    pub exam_date: Option<String>,
    pub session: Option<String>,
}
