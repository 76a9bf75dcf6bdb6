use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::allocations::adapters::inbound::graphql::AllocationsQuery;
use crate::modules::classrooms::adapters::inbound::graphql::ClassroomsQuery;
use crate::modules::exams::adapters::inbound::graphql::ExamsQuery;
use crate::modules::students::adapters::inbound::graphql::StudentsQuery;
use crate::shell::state::AppState;

pub use crate::modules::exams::use_cases::create_exam::inbound::graphql::MutationRoot;

#[derive(MergedObject, Default)]
pub struct QueryRoot(StudentsQuery, ClassroomsQuery, ExamsQuery, AllocationsQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
