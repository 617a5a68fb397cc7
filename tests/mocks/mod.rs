// Each test binary compiles this module separately and uses its own
// subset of the mock surface.
#![allow(dead_code)]

pub mod trade_api_mock;
