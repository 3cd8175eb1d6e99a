//! Test doubles for the execution engine and its collaborators

use super::{ExecutionEngine, Process};
use crate::crew::{Role, RoleDescriptor, WorkItem};
use crate::errors::ExecutionError;
use crate::llm::{ChatMessage, LlmError, LlmProvider};
use crate::tools::Tool;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Provider answering with queued responses and recording every conversation
#[derive(Debug)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<String>>,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl ScriptedProvider {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<ChatMessage>>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(messages);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyResponse("scripted"))
    }
}

#[derive(Debug)]
pub struct StaticTool;

#[async_trait]
impl Tool for StaticTool {
    fn name(&self) -> &str {
        "static"
    }

    fn usage(&self) -> &str {
        "Always answers the same. Usage: static <anything>"
    }

    async fn invoke(&self, _args: &[String]) -> Result<String, String> {
        Ok("static result".to_string())
    }
}

/// What a [`StubEngine`] was asked to run
#[derive(Debug, Clone, PartialEq)]
pub struct Kickoff {
    pub roles: Vec<Role>,
    pub items: Vec<WorkItem>,
}

/// Engine returning a canned outcome and recording its kickoffs
#[derive(Debug)]
pub struct StubEngine {
    outcome: Result<String, ExecutionError>,
    kickoffs: Arc<Mutex<Vec<Kickoff>>>,
}

impl StubEngine {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(error: ExecutionError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, ExecutionError>) -> Self {
        Self {
            outcome,
            kickoffs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn kickoffs(&self) -> Arc<Mutex<Vec<Kickoff>>> {
        Arc::clone(&self.kickoffs)
    }
}

#[async_trait]
impl ExecutionEngine for StubEngine {
    async fn kickoff(
        &self,
        roles: &[RoleDescriptor],
        items: &[WorkItem],
        _process: Process,
    ) -> Result<String, ExecutionError> {
        self.kickoffs.lock().unwrap().push(Kickoff {
            roles: roles.iter().map(|d| d.role).collect(),
            items: items.to_vec(),
        });
        if items.is_empty() {
            return Err(ExecutionError::engine("no work items to execute"));
        }
        self.outcome.clone()
    }
}
