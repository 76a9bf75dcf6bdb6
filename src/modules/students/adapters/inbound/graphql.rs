use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::students::core::student::Student;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct StudentNode {
    pub stu_id: i64,
    pub stu_name: String,
    pub year: u32,
    pub subject: String,
}

impl From<Student> for StudentNode {
    fn from(student: Student) -> Self {
        Self {
            stu_id: student.stu_id,
            stu_name: student.stu_name,
            year: student.year,
            subject: student.subject,
        }
    }
}

#[derive(Default)]
pub struct StudentsQuery;

#[Object]
impl StudentsQuery {
    async fn students(&self, context: &Context<'_>) -> GqlResult<Vec<StudentNode>> {
        let state = context.data_unchecked::<AppState>();
        let students = state
            .students
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(students.into_iter().map(StudentNode::from).collect())
    }
}
