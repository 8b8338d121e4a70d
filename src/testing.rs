//! In-memory transport and clock for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::Duration;

use crate::error::FetchError;
use crate::retry::Sleeper;
use crate::transport::{RawResponse, Transport};

#[derive(Default)]
struct Script {
    responses: HashMap<String, VecDeque<RawResponse>>,
    fallback: Option<RawResponse>,
    requests: Vec<String>,
    tokens: Vec<String>,
}

/// Replays queued responses per URL and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `url`; responses for one URL are served in order.
    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .responses
            .entry(url.to_string())
            .or_default()
            .push_back(RawResponse::new(status, body));
        self
    }

    /// Response for any request without a queued one.
    pub fn fallback(self, status: u16, body: &str) -> Self {
        self.script.lock().unwrap().fallback = Some(RawResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.script.lock().unwrap().tokens.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str, token: &str) -> Result<RawResponse, FetchError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(url.to_string());
        script.tokens.push(token.to_string());
        let queued = script.responses.get_mut(url).and_then(VecDeque::pop_front);
        match queued.or_else(|| script.fallback.clone()) {
            Some(response) => Ok(response),
            None => panic!("no scripted response for {url}"),
        }
    }
}

/// Records requested sleeps instead of waiting.
#[derive(Clone, Default)]
pub struct FakeSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl FakeSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for FakeSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
