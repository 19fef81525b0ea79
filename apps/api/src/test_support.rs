//! Fakes for the generation and persistence boundaries.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::interview::store::{ReviewRecord, ReviewStore};
use crate::llm_client::{ChatMessage, GenerationService, LlmError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Chat {
        system: String,
        history: Vec<ChatMessage>,
        input: String,
    },
    Generate {
        prompt: String,
    },
}

/// Answers every call with a fixed text, or fails every call.
pub struct FakeGeneration {
    reply: Option<String>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeGeneration {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().await.clone()
    }

    fn outcome(&self) -> Result<String, LlmError> {
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

#[async_trait]
impl GenerationService for FakeGeneration {
    async fn chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        input: &str,
    ) -> Result<String, LlmError> {
        self.calls.lock().await.push(FakeCall::Chat {
            system: system.to_string(),
            history: history.to_vec(),
            input: input.to_string(),
        });
        self.outcome()
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().await.push(FakeCall::Generate {
            prompt: prompt.to_string(),
        });
        self.outcome()
    }
}

/// Keeps saved records in memory, or rejects every write.
#[derive(Default)]
pub struct FakeStore {
    fail: bool,
    records: Mutex<Vec<ReviewRecord>>,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
        }
    }

    pub async fn records(&self) -> Vec<ReviewRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ReviewStore for FakeStore {
    async fn save(&self, record: &ReviewRecord) -> Result<()> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
