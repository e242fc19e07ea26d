//! Receiver bring-up and deployment scenarios: transceiver init, the async
//! polling helper, and a `static` store shared between an "interrupt" thread
//! feeding bytes and a main loop reading frames.

mod helpers;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use helpers::{MockClock, MockTimer, MockTransceiver, MockUart};
use korri_lin::error::InitError;
use korri_lin::infra::checksum::{self, ChecksumKind};
use korri_lin::protocol::config::LinConfig;
use korri_lin::protocol::frame::{builder::LinFrameBuilder, resolve_dlc};
use korri_lin::protocol::receiver::{FrameStore, LinReceiver};
use korri_lin::protocol::transport::traits::transceiver::TransceiverMode;
use static_cell::StaticCell;
use tokio::time::{timeout, Duration};

static SHARED_STORE: StaticCell<FrameStore<CriticalSectionRawMutex>> = StaticCell::new();

//==================================================================================Bring-up
#[test]
/// The transceiver is configured and switched to normal mode.
fn test_with_transceiver_initializes() {
    let mut transceiver = MockTransceiver::default();
    let config = LinConfig::builder().baud(19_200).build();
    let store = FrameStore::<NoopRawMutex>::new();

    let rx = LinReceiver::with_transceiver(
        &mut transceiver,
        config,
        MockUart::new(),
        MockClock::default(),
        &store,
    )
    .expect("init must succeed");

    assert_eq!(transceiver.configured_baud, Some(19_200));
    assert_eq!(transceiver.mode, Some(TransceiverMode::Normal));
    assert_eq!(rx.config().baud(), 19_200);
}

#[test]
fn test_with_transceiver_propagates_error() {
    let mut transceiver = MockTransceiver {
        fail_init: true,
        ..Default::default()
    };
    let store = FrameStore::<NoopRawMutex>::new();

    let result = LinReceiver::with_transceiver(
        &mut transceiver,
        LinConfig::default(),
        MockUart::new(),
        MockClock::default(),
        &store,
    );

    assert!(matches!(
        result,
        Err(InitError::Transceiver("uart unavailable"))
    ));
    assert_eq!(transceiver.mode, None);
}

//==================================================================================Async
#[tokio::test]
/// `next_frame` sleeps while the UART is empty and returns once a frame verifies.
async fn test_next_frame_waits_for_bytes() {
    let uart = MockUart::new();
    let store = FrameStore::<NoopRawMutex>::new();
    let mut rx = LinReceiver::new(
        LinConfig::default(),
        uart.clone(),
        MockClock::default(),
        &store,
    );
    let mut timer = MockTimer;

    let feeder = {
        let uart = uart.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let wire = LinFrameBuilder::new(0x2B, &[0xC0, 0xFF, 0xEE, 0x00])
                .build()
                .unwrap();
            uart.push(0x99, false);
            uart.push_frame(wire.as_slice());
        })
    };

    let frame = timeout(Duration::from_secs(2), rx.next_frame(&mut timer))
        .await
        .expect("frame must arrive before the timeout");
    feeder.await.unwrap();

    assert_eq!(frame.id, 0x2B);
    assert_eq!(frame.payload(), &[0xC0, 0xFF, 0xEE, 0x00]);
    assert_eq!(rx.get_data(), Some(frame));
}

//==================================================================================Shared store
#[test]
/// A reader polling a shared store only ever sees whole, valid frames.
fn test_shared_store_across_threads() {
    let store: &'static FrameStore<CriticalSectionRawMutex> =
        SHARED_STORE.init(FrameStore::new());
    let uart = MockUart::new();
    const FRAMES: u8 = 200;

    for n in 0..FRAMES {
        let id = n % 0x3C;
        let len = resolve_dlc(id) as usize;
        let payload: Vec<u8> = (0..len as u8).map(|i| n.wrapping_add(i)).collect();
        let wire = LinFrameBuilder::new(id, &payload).build().unwrap();
        uart.push_frame(wire.as_slice());
    }

    let mut rx = LinReceiver::new(
        LinConfig::default(),
        uart.clone(),
        MockClock::default(),
        store,
    );

    std::thread::scope(|scope| {
        let producer = scope.spawn(move || {
            let mut verified = 0u32;
            while uart.pending() > 0 {
                if rx.read() {
                    verified += 1;
                }
            }
            verified
        });

        while !producer.is_finished() {
            if let Some(frame) = store.latest() {
                assert!(checksum::verify(
                    ChecksumKind::Enhanced,
                    frame.pid.raw(),
                    frame.payload(),
                    frame.checksum
                ));
            }
        }

        assert_eq!(producer.join().unwrap(), FRAMES as u32);
    });

    let last = store.latest().expect("last frame published");
    assert_eq!(last.id, (FRAMES - 1) % 0x3C);
}
