use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use netrig_core::error::{ProvisionerError, Result};
use netrig_core::inventory::Device;
use netrig_core::transport::{Session, Transport};

/// What a scripted device does when the provisioner reaches it.
#[derive(Debug, Clone, Copy)]
pub enum OpenScript {
    /// Session opens; every exchange answers with an echo
    Accept,
    /// Transport-level timeout reaching the host
    Timeout,
    /// Credential rejection
    AuthReject,
    /// Session opens, but the nth exchange fails (config and verification
    /// combined, zero-based)
    FailOnSend(usize),
}

/// Everything the mock observed, in call order.
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    /// Device names whose sessions were opened (attempted), in order
    pub opens: Vec<String>,
    /// Bulk submissions: device name and the submitted plan
    pub config_sets: Vec<(String, Vec<String>)>,
    /// Individual commands: device name and command
    pub commands: Vec<(String, String)>,
    /// Device names whose sessions were closed, in order
    pub closes: Vec<String>,
}

/// Scripted in-memory transport for provisioner tests.
pub struct MockTransport {
    scripts: HashMap<String, OpenScript>,
    log: Arc<Mutex<CallLog>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            log: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    /// Scripts the behavior for one device; unscripted devices accept.
    pub fn script(mut self, name: &str, script: OpenScript) -> Self {
        self.scripts.insert(name.to_string(), script);
        self
    }

    /// Snapshot of everything observed so far.
    pub fn log(&self) -> CallLog {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Session = MockSession;

    async fn open(&self, device: &Device) -> Result<MockSession> {
        let name = device.name().to_string();
        self.log.lock().unwrap().opens.push(name.clone());

        let script = self
            .scripts
            .get(&name)
            .copied()
            .unwrap_or(OpenScript::Accept);
        match script {
            OpenScript::Timeout => Err(ProvisionerError::connection_timeout(device.host())),
            OpenScript::AuthReject => {
                Err(ProvisionerError::authentication_failure(device.host()))
            }
            OpenScript::Accept => Ok(MockSession::new(name, None, Arc::clone(&self.log))),
            OpenScript::FailOnSend(turn) => {
                Ok(MockSession::new(name, Some(turn), Arc::clone(&self.log)))
            }
        }
    }
}

pub struct MockSession {
    device: String,
    fail_on_send: Option<usize>,
    sends: usize,
    log: Arc<Mutex<CallLog>>,
}

impl MockSession {
    fn new(device: String, fail_on_send: Option<usize>, log: Arc<Mutex<CallLog>>) -> Self {
        Self {
            device,
            fail_on_send,
            sends: 0,
            log,
        }
    }

    fn take_turn(&mut self) -> Result<()> {
        let turn = self.sends;
        self.sends += 1;
        if self.fail_on_send == Some(turn) {
            return Err(ProvisionerError::session(
                self.device.clone(),
                "scripted session failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Session for MockSession {
    async fn send_config_set(&mut self, commands: &[String]) -> Result<String> {
        self.log
            .lock()
            .unwrap()
            .config_sets
            .push((self.device.clone(), commands.to_vec()));
        self.take_turn()?;
        Ok(format!("applied {} commands", commands.len()))
    }

    async fn send_command(&mut self, command: &str) -> Result<String> {
        self.log
            .lock()
            .unwrap()
            .commands
            .push((self.device.clone(), command.to_string()));
        self.take_turn()?;
        Ok(format!("{command} done"))
    }

    async fn close(&mut self) -> Result<()> {
        self.log.lock().unwrap().closes.push(self.device.clone());
        Ok(())
    }
}
