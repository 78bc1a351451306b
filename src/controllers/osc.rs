// src/controllers/osc.rs
// OSC Controller
//
// Listens on the configured port and turns parameter messages into commands.
// The receiver is drained without blocking once per update.

use nannou_osc as osc;

use crate::error::{FilError, Result};
use crate::models::{ParamKind, Params};

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    SetParam { kind: ParamKind, value: f32 },
}

impl OscCommand {
    pub fn apply(&self, params: &mut Params) {
        match self {
            OscCommand::SetParam { kind, value } => params.set(*kind, *value),
        }
    }
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self> {
        let receiver = osc::receiver(port).map_err(|e| FilError::OscBind {
            port,
            message: e.to_string(),
        })?;
        log::info!("Listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                if let Some(command) = parse_message(&message) {
                    self.command_queue.push(command);
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Maps `/speed`, `/overlap`, `/fade` and `/prob` with a numeric first
/// argument onto a parameter write.
pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    let Some(kind) = ParamKind::from_osc_addr(&message.addr) else {
        log::debug!("Unknown OSC address pattern: {}", message.addr);
        return None;
    };

    let value = match message.args.first() {
        Some(osc::Type::Float(f)) => *f,
        Some(osc::Type::Double(d)) => *d as f32,
        Some(osc::Type::Int(i)) => *i as f32,
        Some(osc::Type::Long(l)) => *l as f32,
        other => {
            log::debug!("{} expects a number, got {:?}", message.addr, other);
            return None;
        }
    };

    Some(OscCommand::SetParam { kind, value })
}
