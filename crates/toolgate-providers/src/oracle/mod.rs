//! Schema oracle implementations
//!
//! | Oracle | Description |
//! |--------|-------------|
//! | [`RulesOracle`] | Deterministic, in-process structural rules |
//! | [`OpenAiOracle`] | Hosted chat model judging via an OpenAI-compatible API |

pub mod openai;
pub mod rules;

pub use openai::OpenAiOracle;
pub use rules::RulesOracle;
