//! Scan session tests against an in-memory transport

use super::*;
use crate::error::{DecodeError, HciError};
use crate::hci::constants::*;
use crate::hci::{Event, EventFilter, HciCommand, HciTransport, Opcode};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// Replays queued packets, then cancels the session and times out
struct MockTransport {
    incoming: VecDeque<Result<Vec<u8>, HciError>>,
    sent: Vec<HciCommand>,
    filter: Option<EventFilter>,
    closed: bool,
    cancel: CancelHandle,
    /// Fail every send once this many commands went out
    fail_sends_after: Option<usize>,
}

impl MockTransport {
    fn new(cancel: &CancelHandle) -> Self {
        Self {
            incoming: VecDeque::new(),
            sent: Vec::new(),
            filter: None,
            closed: false,
            cancel: cancel.clone(),
            fail_sends_after: None,
        }
    }

    fn with_packets(cancel: &CancelHandle, packets: Vec<Vec<u8>>) -> Self {
        let mut transport = Self::new(cancel);
        transport.incoming = packets.into_iter().map(Ok).collect();
        transport
    }

    fn sent_opcodes(&self) -> Vec<Opcode> {
        self.sent.iter().map(|c| c.opcode()).collect()
    }
}

impl HciTransport for MockTransport {
    fn send_command(&mut self, command: &HciCommand) -> Result<(), HciError> {
        if self.closed {
            return Err(HciError::InvalidState("closed"));
        }
        if self.fail_sends_after == Some(self.sent.len()) {
            return Err(HciError::SendError(io::Error::new(
                io::ErrorKind::Other,
                "command rejected",
            )));
        }
        self.sent.push(command.clone());
        Ok(())
    }

    fn set_event_filter(&mut self, filter: &EventFilter) -> Result<(), HciError> {
        self.filter = Some(*filter);
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, HciError> {
        match self.incoming.pop_front() {
            Some(Ok(mut packet)) => {
                packet.truncate(max_len);
                Ok(packet)
            }
            Some(Err(err)) => Err(err),
            None => {
                self.cancel.cancel();
                Err(HciError::Timeout)
            }
        }
    }

    fn close(&mut self) -> Result<(), HciError> {
        self.closed = true;
        Ok(())
    }
}

fn event_packet(event_code: u8, params: &[u8]) -> Vec<u8> {
    let mut packet = vec![HCI_EVENT_PKT, event_code, params.len() as u8];
    packet.extend_from_slice(params);
    packet
}

fn adv_packet(addr: [u8; 6], data: &[u8], rssi: i8) -> Vec<u8> {
    let mut params = vec![EVT_LE_ADVERTISING_REPORT, 1, LE_ADV_IND, 0x01];
    params.extend_from_slice(&addr);
    params.push(data.len() as u8);
    params.extend_from_slice(data);
    params.push(rssi as u8);
    event_packet(EVT_LE_META_EVENT, &params)
}

fn status_packet() -> Vec<u8> {
    event_packet(EVT_CMD_STATUS, &[0x00, 0x01, 0x0B, 0x20])
}

/// Callback that records `name` or the first report's address of each event
fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(Event<'_>) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback = move |event: Event<'_>| {
        let entry = match event.advertising_reports() {
            Some(reports) => reports
                .iter()
                .map(|r| format!("{} {}", r.address_string(), r.rssi))
                .collect::<Vec<_>>()
                .join(","),
            None => event.name().to_string(),
        };
        sink.lock().unwrap().push(entry);
    };
    (seen, callback)
}

fn session_with(
    packets: Vec<Vec<u8>>,
) -> (ScanSessionBuilder<MockTransport>, Arc<Mutex<Vec<String>>>) {
    let cancel = CancelHandle::new();
    let transport = MockTransport::with_packets(&cancel, packets);
    let (seen, callback) = recorder();
    let builder = ScanSession::builder(transport)
        .cancel_handle(cancel)
        .on_event(callback);
    (builder, seen)
}

#[test]
fn test_build_requires_callback() {
    let cancel = CancelHandle::new();
    let result = ScanSession::builder(MockTransport::new(&cancel)).build();
    assert!(matches!(result, Err(HciError::MissingCallback)));
}

#[test]
fn test_configure_sends_parameters_then_enable() {
    let (builder, _) = session_with(vec![]);
    let mut session = builder.build().unwrap();
    assert_eq!(session.state(), ScanState::Idle);

    session.configure().unwrap();
    assert_eq!(session.state(), ScanState::Configured);

    let transport = session.transport();
    assert_eq!(
        transport.sent_opcodes(),
        vec![Opcode::LE_SET_SCAN_PARAMETERS, Opcode::LE_SET_SCAN_ENABLE]
    );
    assert_eq!(
        transport.sent[0].params(),
        [0x01, 0x00, 0x10, 0x00, 0x10, 0x01, 0x00]
    );
    assert_eq!(transport.sent[1].params(), [0x01, 0x00]);
    assert_eq!(transport.filter, Some(EventFilter::all_events()));

    assert!(matches!(
        session.configure(),
        Err(HciError::InvalidState("configured"))
    ));
}

#[test]
fn test_configure_uses_session_config() {
    let config = ScanConfig {
        scan_type: crate::hci::ScanType::Passive,
        interval: 0x20,
        window: 0x08,
        own_address_type: crate::gap::AddressType::Public,
        filter_duplicates: true,
        ..ScanConfig::default()
    };
    let (builder, _) = session_with(vec![]);
    let mut session = builder.config(config).build().unwrap();
    session.configure().unwrap();

    let transport = session.transport();
    assert_eq!(
        transport.sent[0].params(),
        [0x00, 0x00, 0x20, 0x00, 0x08, 0x00, 0x00]
    );
    assert_eq!(transport.sent[1].params(), [0x01, 0x01]);
}

#[test]
fn test_run_delivers_every_event() {
    let addr = [0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA];
    let (builder, seen) = session_with(vec![
        status_packet(),
        adv_packet(addr, &[0x02, 0x01, 0x06, 0x00], -67),
    ]);
    let mut session = builder.build().unwrap();

    let stats = session.run().unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["EVT_CMD_STATUS".to_string(), "AA:BB:CC:DD:EE:FF -67".to_string()]
    );
    assert_eq!(stats.packets, 2);
    assert_eq!(stats.delivered, 2);
    assert_eq!(stats.timeouts, 1);
    assert_eq!(session.state(), ScanState::Stopped);
}

#[test]
fn test_unknown_event_does_not_stop_delivery() {
    let (builder, seen) = session_with(vec![
        event_packet(0x08, &[0x00, 0x40, 0x00, 0x01]),
        adv_packet([1, 2, 3, 4, 5, 6], &[], -40),
    ]);
    let mut session = builder.filter(advertising_only).build().unwrap();

    let stats = session.run().unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["06:05:04:03:02:01 -40".to_string()]);
    assert_eq!(stats.unknown, 1);
    assert_eq!(stats.filtered, 1);
    assert_eq!(stats.delivered, 1);
}

#[test]
fn test_decode_errors_do_not_stop_the_loop() {
    let (builder, seen) = session_with(vec![
        vec![HCI_EVENT_PKT, EVT_LE_META_EVENT],
        vec![HCI_EVENT_PKT, EVT_LE_META_EVENT, 0x10, EVT_LE_ADVERTISING_REPORT],
        event_packet(EVT_LE_META_EVENT, &[EVT_LE_CONN_UPDATE_COMPLETE, 0x00]),
        event_packet(EVT_LE_META_EVENT, &[EVT_LE_ADVERTISING_REPORT, 1, 0x00]),
        adv_packet([1, 2, 3, 4, 5, 6], &[0x02, 0x01, 0x06], -50),
    ]);
    let mut session = builder.build().unwrap();

    let stats = session.run().unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["06:05:04:03:02:01 -50".to_string()]);
    assert_eq!(stats.packets, 5);
    assert_eq!(stats.decode_errors, 3);
    assert_eq!(stats.unsupported, 1);
    assert_eq!(stats.delivered, 1);
}

#[test]
fn test_filter_can_replace_events() {
    let mut both = vec![EVT_LE_ADVERTISING_REPORT, 2];
    for (addr, rssi) in [([1u8; 6], -30i8), ([2u8; 6], -90i8)] {
        both.extend_from_slice(&[LE_ADV_IND, 0x00]);
        both.extend_from_slice(&addr);
        both.push(0);
        both.push(rssi as u8);
    }

    let (builder, seen) = session_with(vec![event_packet(EVT_LE_META_EVENT, &both)]);
    let mut session = builder
        .filter(|event| match event {
            Event::LeAdvertisingReports { mut reports } => {
                reports.retain(|r| r.rssi > -70);
                Some(Event::LeAdvertisingReports { reports })
            }
            other => Some(other),
        })
        .build()
        .unwrap();

    session.run().unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["01:01:01:01:01:01 -30".to_string()]);
}

#[test]
fn test_catch_one_reports_timeouts_and_decode_errors() {
    let (builder, seen) = session_with(vec![vec![HCI_ACL_PKT, 0x00, 0x00]]);
    let mut session = builder.build().unwrap();
    session.configure().unwrap();

    assert!(matches!(
        session.catch_one(),
        Err(HciError::Decode(DecodeError::UnexpectedPacketType(HCI_ACL_PKT)))
    ));
    assert!(matches!(session.catch_one(), Err(HciError::Timeout)));
    assert!(seen.lock().unwrap().is_empty());

    let stats = session.stats();
    assert_eq!(stats.packets, 1);
    assert_eq!(stats.decode_errors, 1);
    assert_eq!(stats.timeouts, 1);
}

#[test]
fn test_catch_one_requires_active_session() {
    let (builder, seen) = session_with(vec![status_packet(), status_packet()]);
    let mut session = builder.build().unwrap();

    // Nothing was sent to the controller yet
    assert!(matches!(session.catch_one(), Err(HciError::InvalidState("idle"))));
    assert_eq!(session.transport().incoming.len(), 2);
    assert!(session.transport().sent.is_empty());

    session.configure().unwrap();
    session.catch_one().unwrap();
    session.stop().unwrap();

    assert!(matches!(session.catch_one(), Err(HciError::InvalidState("stopped"))));
    assert_eq!(session.transport().incoming.len(), 1);
    assert_eq!(*seen.lock().unwrap(), vec!["EVT_CMD_STATUS".to_string()]);
    assert_eq!(session.stats().delivered, 1);
}

#[test]
fn test_failed_configure_closes_transport() {
    let cancel = CancelHandle::new();
    let mut transport = MockTransport::new(&cancel);
    transport.fail_sends_after = Some(1);

    let (_, callback) = recorder();
    let mut session = ScanSession::builder(transport)
        .cancel_handle(cancel)
        .on_event(callback)
        .build()
        .unwrap();

    assert!(matches!(session.run(), Err(HciError::SendError(_))));
    assert_eq!(session.state(), ScanState::Stopped);

    let transport = session.transport();
    assert!(transport.closed);
    assert_eq!(transport.sent_opcodes(), vec![Opcode::LE_SET_SCAN_PARAMETERS]);
    assert!(transport.filter.is_none());

    assert!(matches!(session.configure(), Err(HciError::InvalidState("stopped"))));
}

#[test]
fn test_fatal_receive_error_ends_run() {
    let cancel = CancelHandle::new();
    let mut transport = MockTransport::with_packets(&cancel, vec![status_packet()]);
    transport.incoming.push_back(Err(HciError::ReceiveError(io::Error::new(
        io::ErrorKind::Other,
        "adapter removed",
    ))));
    transport.incoming.push_back(Ok(status_packet()));

    let (seen, callback) = recorder();
    let mut session = ScanSession::builder(transport)
        .cancel_handle(cancel.clone())
        .on_event(callback)
        .build()
        .unwrap();

    assert!(matches!(session.run(), Err(HciError::ReceiveError(_))));
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert!(!cancel.is_cancelled());
    assert_eq!(session.state(), ScanState::Stopped);

    let transport = session.transport();
    assert!(transport.closed);
    assert_eq!(transport.incoming.len(), 1);
    assert_eq!(transport.sent.last().unwrap().params(), [0x00, 0x00]);
}

#[test]
fn test_stop_disables_scan_and_closes() {
    let (builder, _) = session_with(vec![]);
    let mut session = builder.build().unwrap();
    session.configure().unwrap();

    session.stop().unwrap();
    assert_eq!(session.state(), ScanState::Stopped);

    let transport = session.transport();
    assert!(transport.closed);
    assert_eq!(
        transport.sent_opcodes(),
        vec![
            Opcode::LE_SET_SCAN_PARAMETERS,
            Opcode::LE_SET_SCAN_ENABLE,
            Opcode::LE_SET_SCAN_ENABLE,
        ]
    );
    assert_eq!(transport.sent[2].params(), [0x00, 0x00]);

    // Second stop is a no-op
    session.stop().unwrap();
    assert_eq!(session.transport().sent.len(), 3);

    assert!(matches!(session.run(), Err(HciError::InvalidState("stopped"))));
}

#[test]
fn test_stop_before_configure_only_closes() {
    let (builder, _) = session_with(vec![]);
    let mut session = builder.build().unwrap();

    session.stop().unwrap();
    assert_eq!(session.state(), ScanState::Stopped);
    assert!(session.transport().closed);
    assert!(session.transport().sent.is_empty());
}

#[test]
fn test_cancel_before_run_exits_immediately() {
    let (builder, seen) = session_with(vec![status_packet()]);
    let mut session = builder.build().unwrap();
    session.cancel_handle().cancel();

    let stats = session.run().unwrap();
    assert_eq!(stats, ScanStats::default());
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(session.transport().incoming.len(), 1);
    assert_eq!(session.state(), ScanState::Stopped);
}

#[test]
fn test_cancel_from_another_thread() {
    let cancel = CancelHandle::new();
    let remote = cancel.clone();
    let handle = std::thread::spawn(move || remote.cancel());
    handle.join().unwrap();
    assert!(cancel.is_cancelled());
}

#[test]
fn test_default_config() {
    let config = ScanConfig::default();
    assert_eq!(config.device_id, 0);
    assert_eq!(config.interval, 0x10);
    assert_eq!(config.window, 0x10);
    assert_eq!(config.max_packet_len, HCI_MAX_EVENT_SIZE);
    assert!(!config.filter_duplicates);
    assert_eq!(ScanState::Scanning.to_string(), "scanning");
}
