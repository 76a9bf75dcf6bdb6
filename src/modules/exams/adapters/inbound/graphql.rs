use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::exams::core::exam::Exam;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct ExamNode {
    pub id: i64,
    pub exam_name: String,
    /// ISO date, `YYYY-MM-DD`.
    pub exam_date: Option<String>,
    pub session: Option<String>,
}

impl From<Exam> for ExamNode {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            exam_name: exam.exam_name,
            exam_date: exam.exam_date.map(|d| d.format("%Y-%m-%d").to_string()),
            session: exam.session,
        }
    }
}

#[derive(SimpleObject)]
pub struct RegistrationNode {
    pub stu_id: i64,
    pub year: u32,
    pub subject_code: String,
}

#[derive(Default)]
pub struct ExamsQuery;

#[Object]
impl ExamsQuery {
    async fn exams(&self, context: &Context<'_>) -> GqlResult<Vec<ExamNode>> {
        let state = context.data_unchecked::<AppState>();
        let exams = state
            .exams
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(exams.into_iter().map(ExamNode::from).collect())
    }

    async fn registrations(
        &self,
        context: &Context<'_>,
        exam_id: i64,
    ) -> GqlResult<Vec<RegistrationNode>> {
        let state = context.data_unchecked::<AppState>();
        let registrations = state
            .registrations
            .list_by_exam(exam_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(registrations
            .into_iter()
            .map(|r| RegistrationNode {
                stu_id: r.stu_id,
                year: r.year,
                subject_code: r.subject_code,
            })
            .collect())
    }
}
