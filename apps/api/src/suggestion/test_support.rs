use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::{CompletionModel, LlmError};

/// A `CompletionModel` that answers every prompt from a fixed script and
/// remembers the prompts it was given.
#[derive(Debug)]
pub struct ScriptedModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

#[derive(Debug)]
enum Reply {
    Text(String),
    // LlmError is not Clone; the first call takes it, later calls see EmptyContent.
    Fail(Mutex<Option<LlmError>>),
    // One (delay, text) per call, in call order; EmptyContent once exhausted.
    Sequence(Mutex<VecDeque<(Duration, String)>>),
}

impl ScriptedModel {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text(response: &str) -> Self {
        Self::with_reply(Reply::Text(response.to_string()))
    }

    pub fn failing(error: LlmError) -> Self {
        Self::with_reply(Reply::Fail(Mutex::new(Some(error))))
    }

    /// Answers successive calls with successive replies, each after its delay.
    pub fn sequence(replies: &[(Duration, &str)]) -> Self {
        let queue = replies
            .iter()
            .map(|(delay, text)| (*delay, text.to_string()))
            .collect();
        Self::with_reply(Reply::Sequence(Mutex::new(queue)))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(error) => Err(error
                .lock()
                .unwrap()
                .take()
                .unwrap_or(LlmError::EmptyContent)),
            Reply::Sequence(queue) => {
                let next = queue.lock().unwrap().pop_front();
                let (delay, text) = next.ok_or(LlmError::EmptyContent)?;
                tokio::time::sleep(delay).await;
                Ok(text)
            }
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
