use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn post<'a>(&'a mut self) -> PostFixtures<'a> {
        PostFixtures { setup: self }
    }
}

pub struct PostFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
