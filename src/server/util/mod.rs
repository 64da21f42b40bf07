//! Utility helpers for server code.


#[cfg(test)]
impl From<crate::server::error::Error> for voltmarket_test_utils::TestError {
    fn from(err: crate::server::error::Error) -> Self {
        Self::DbErr(sea_orm::DbErr::Custom(err.to_string()))
    }
}
