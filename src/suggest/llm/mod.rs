//! LLM client abstraction for the suggestion flow.

mod anthropic;

pub use anthropic::Anthropic;

use async_trait::async_trait;

use crate::error::Result;

/// LLM completion client trait.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Mock LLM for testing.
#[cfg(any(test, feature = "testkit"))]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Returns a canned response and records every prompt it receives.
    ///
    /// Clones share the prompt log, so a test can keep one handle and box
    /// the other into the code under test.
    #[derive(Clone)]
    pub struct MockLlm {
        response: String,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockLlm {
        pub fn new(response: impl Into<String>) -> Self {
            Self {
                response: response.into(),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Prompts seen so far, in call order.
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().clone()
        }
    }

    #[async_trait]
    impl Llm for MockLlm {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }
}
