use crate::modules::allocations::core::selection::SelectionError;
use crate::shell::error::ApiError;

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        if err.is_not_found() {
            ApiError::not_found(err.to_string())
        } else {
            ApiError::bad_request(err.to_string())
        }
    }
}
