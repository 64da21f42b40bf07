use voltmarket_test_utils::prelude::*;

use entity::sea_orm_active_enums::{PostStatus, PostType};

use crate::{
    model::post::{PostListQuery, UpdatePostDto},
    server::{data::post::PostRepository, util::test::post::mock_create_post_dto},
};

mod create;
mod lifecycle;
mod list;
