use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::exams::adapters::inbound::graphql::ExamNode;
use crate::modules::exams::use_cases::create_exam::command::CreateExam;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_exam(
        &self,
        context: &Context<'_>,
        exam_name: String,
        exam_date: Option<String>,
        session: Option<String>,
    ) -> GqlResult<ExamNode> {
        let state = context.data_unchecked::<AppState>();

        let command = CreateExam {
            exam_name,
            exam_date,
            session,
        };

        let exam = state
            .create_exam_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ExamNode::from(exam))
    }
}
