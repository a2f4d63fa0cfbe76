//! Scan session state machine
//!
//! ```text
//! Idle --configure--> Configured --run--> Scanning --cancel--> Stopped
//! ```
//!
//! The loop is synchronous: one blocking receive per iteration, with the
//! filter and callback running inline before the next packet is requested.

use crate::error::{DecodeError, HciError};
use crate::hci::event::{decode, Event};
use crate::hci::{EventFilter, HciCommand, HciSocket, HciTransport};
use crate::scan::ScanConfig;
use log::{debug, info, trace, warn};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives every event that passes the filter
pub type EventCallback = Box<dyn for<'a> FnMut(Event<'a>) + Send + 'static>;

/// Vetoes (`None`), passes, or replaces an event before delivery
pub type EventFilterFn = Box<dyn for<'a> FnMut(Event<'a>) -> Option<Event<'a>> + Send + 'static>;

/// Ready-made filter that only lets advertising reports through
pub fn advertising_only(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::LeAdvertisingReports { .. } => Some(event),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Configured,
    Scanning,
    Stopped,
}

impl ScanState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Configured => "configured",
            ScanState::Scanning => "scanning",
            ScanState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cooperative stop signal, checked between loop iterations
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counters kept by a running session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub packets: u64,
    pub delivered: u64,
    pub filtered: u64,
    pub unknown: u64,
    pub unsupported: u64,
    pub decode_errors: u64,
    pub timeouts: u64,
}

/// Collects the callback, filter and config for a [`ScanSession`]
pub struct ScanSessionBuilder<T: HciTransport> {
    transport: T,
    config: ScanConfig,
    callback: Option<EventCallback>,
    filter: Option<EventFilterFn>,
    cancel: CancelHandle,
}

impl ScanSessionBuilder<HciSocket> {
    /// Open the raw HCI socket named by `config.device_id`
    pub fn open(config: ScanConfig) -> Result<Self, HciError> {
        let mut socket = HciSocket::open(config.device_id)?;
        socket.set_receive_timeout(config.receive_timeout);
        Ok(ScanSession::builder(socket).config(config))
    }
}

impl<T: HciTransport> ScanSessionBuilder<T> {
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the event callback (required)
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Event<'_>) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Install a filter; without one every event is delivered
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: FnMut(Event<'_>) -> Option<Event<'_>> + Send + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Share an existing cancel flag instead of creating a new one
    pub fn cancel_handle(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn build(self) -> Result<ScanSession<T>, HciError> {
        let callback = self.callback.ok_or(HciError::MissingCallback)?;
        Ok(ScanSession {
            transport: self.transport,
            config: self.config,
            state: ScanState::Idle,
            callback,
            filter: self.filter,
            cancel: self.cancel,
            stats: ScanStats::default(),
        })
    }
}

/// An active LE scan over an exclusively owned transport
pub struct ScanSession<T: HciTransport> {
    transport: T,
    config: ScanConfig,
    state: ScanState,
    callback: EventCallback,
    filter: Option<EventFilterFn>,
    cancel: CancelHandle,
    stats: ScanStats,
}

impl<T: HciTransport> ScanSession<T> {
    pub fn builder(transport: T) -> ScanSessionBuilder<T> {
        ScanSessionBuilder {
            transport,
            config: ScanConfig::default(),
            callback: None,
            filter: None,
            cancel: CancelHandle::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Send scan parameters, enable scanning and install the event filter
    ///
    /// If any step fails the transport is closed and the session ends up
    /// `Stopped`; the controller may be left with scanning enabled.
    pub fn configure(&mut self) -> Result<(), HciError> {
        if self.state != ScanState::Idle {
            return Err(HciError::InvalidState(self.state.as_str()));
        }

        if let Err(err) = self.send_setup() {
            warn!("LE scan setup failed: {}", err);
            self.state = ScanState::Stopped;
            if let Err(close_err) = self.transport.close() {
                debug!("Failed to close transport after setup error: {}", close_err);
            }
            return Err(err);
        }

        let config = &self.config;
        info!(
            "LE scan configured: {:?} interval={:#04x} window={:#04x}",
            config.scan_type, config.interval, config.window
        );
        self.state = ScanState::Configured;
        Ok(())
    }

    fn send_setup(&mut self) -> Result<(), HciError> {
        let config = &self.config;
        self.transport.send_command(&HciCommand::le_set_scan_parameters(
            config.scan_type,
            config.interval,
            config.window,
            config.own_address_type,
            config.filter_policy,
        ))?;
        self.transport
            .send_command(&HciCommand::le_set_scan_enable(true, config.filter_duplicates))?;
        self.transport.set_event_filter(&EventFilter::all_events())
    }

    /// Receive, decode, filter and deliver exactly one packet
    ///
    /// Decode failures and receive timeouts come back as errors for which
    /// [`HciError::is_fatal`] is false. Only a configured or scanning
    /// session may receive.
    pub fn catch_one(&mut self) -> Result<(), HciError> {
        match self.state {
            ScanState::Configured | ScanState::Scanning => {}
            state => return Err(HciError::InvalidState(state.as_str())),
        }

        let packet = match self.transport.receive(self.config.max_packet_len) {
            Ok(packet) => packet,
            Err(HciError::Timeout) => {
                self.stats.timeouts += 1;
                return Err(HciError::Timeout);
            }
            Err(err) => return Err(err),
        };
        self.stats.packets += 1;

        let event = match decode(&packet) {
            Ok(event) => event,
            Err(err) => {
                match err {
                    DecodeError::NotSupported(_) => self.stats.unsupported += 1,
                    _ => self.stats.decode_errors += 1,
                }
                return Err(err.into());
            }
        };

        if let Event::Unknown { event_code, .. } = event {
            trace!("Unknown HCI event {:#04x}", event_code);
            self.stats.unknown += 1;
        }

        let event = match self.filter.as_mut() {
            Some(filter) => filter(event),
            None => Some(event),
        };

        match event {
            Some(event) => {
                trace!("Delivering {}", event.name());
                (self.callback)(event);
                self.stats.delivered += 1;
            }
            None => self.stats.filtered += 1,
        }

        Ok(())
    }

    /// Run the receive loop until cancelled, then stop the scan
    ///
    /// An idle session is configured first. Only fatal transport errors end
    /// the loop early; the scan is still disabled on a best effort basis.
    pub fn run(&mut self) -> Result<ScanStats, HciError> {
        match self.state {
            ScanState::Idle => self.configure()?,
            ScanState::Configured => {}
            state => return Err(HciError::InvalidState(state.as_str())),
        }

        self.state = ScanState::Scanning;
        info!("LE scan started");

        while !self.cancel.is_cancelled() {
            match self.catch_one() {
                Ok(()) => {}
                Err(HciError::Timeout) => {}
                Err(err) if !err.is_fatal() => {
                    warn!("Dropped HCI packet: {}", err);
                }
                Err(err) => {
                    warn!("LE scan aborted: {}", err);
                    if let Err(stop_err) = self.stop() {
                        debug!("Failed to stop scan after error: {}", stop_err);
                    }
                    return Err(err);
                }
            }
        }

        self.stop()?;
        Ok(self.stats)
    }

    /// Disable scanning and close the transport
    pub fn stop(&mut self) -> Result<(), HciError> {
        match self.state {
            ScanState::Stopped => return Ok(()),
            ScanState::Idle => {
                self.state = ScanState::Stopped;
                return self.transport.close();
            }
            ScanState::Configured | ScanState::Scanning => {}
        }

        self.state = ScanState::Stopped;
        let disabled = self
            .transport
            .send_command(&HciCommand::le_set_scan_enable(false, false));
        let closed = self.transport.close();
        info!(
            "LE scan stopped: {} packets, {} delivered",
            self.stats.packets, self.stats.delivered
        );
        disabled.and(closed)
    }
}
