use crate::server::model::db::{
    AccountModel, BikeDetailsModel, CarDetailsModel, PostImageModel, PostModel, VerificationModel,
};

/// A post row together with its optionally-loaded relations.
///
/// `None` in a relation slot means the relation was not loaded (or no row
/// exists); the assembler omits the corresponding response block instead of
/// defaulting it. At most one of `car_details`/`bike_details` is ever
/// populated for a stored post.
pub struct PostAggregate {
    pub post: PostModel,
    pub seller: Option<AccountModel>,
    pub car_details: Option<CarDetailsModel>,
    pub bike_details: Option<BikeDetailsModel>,
    pub images: Option<Vec<PostImageModel>>,
    pub verification: Option<VerificationModel>,
}

impl PostAggregate {
    /// Wraps a bare post row with no relations loaded.
    pub fn bare(post: PostModel) -> Self {
        Self {
            post,
            seller: None,
            car_details: None,
            bike_details: None,
            images: None,
            verification: None,
        }
    }
}
