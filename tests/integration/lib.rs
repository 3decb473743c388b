mod support;

pub(crate) use support::*;

mod lifting_state_tests;
mod shared_color_property_tests;
