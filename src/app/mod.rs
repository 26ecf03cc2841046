// Presentation: text/JSON rendering of the facade and the self-check suite.

pub mod demo;
pub mod self_check;
