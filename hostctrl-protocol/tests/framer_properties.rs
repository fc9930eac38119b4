//! Property tests for the byte framer

use hostctrl_protocol::{
    Command, FeedStatus, Framer, Mailbox, ParserState, MAX_COMMAND_LEN, MAX_PARAM_LEN,
};
use proptest::prelude::*;

fn param_byte() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("no line terminators", |b| *b != b'\r' && *b != b'\n')
}

fn wire(command: &[u8], param: &[u8], terminator: u8) -> Vec<u8> {
    let mut bytes = vec![b'!'];
    bytes.extend_from_slice(command);
    bytes.push(b'#');
    bytes.extend_from_slice(param);
    bytes.push(terminator);
    bytes
}

proptest! {
    #[test]
    fn no_start_byte_never_yields_a_frame(
        bytes in proptest::collection::vec(any::<u8>().prop_filter("no start", |b| *b != b'!'), 0..256)
    ) {
        let mut framer = Framer::new();
        let mut mailbox = Mailbox::new();
        for byte in bytes {
            prop_assert_eq!(framer.feed(byte, &mut mailbox), FeedStatus::Ignored);
        }
        prop_assert!(!mailbox.is_ready());
        prop_assert_eq!(framer.state(), ParserState::Idle);
    }

    #[test]
    fn well_formed_frames_round_trip(
        command in proptest::collection::vec(b'A'..=b'Z', 1..=MAX_COMMAND_LEN),
        param in proptest::collection::vec(param_byte(), 0..=MAX_PARAM_LEN),
        terminator in prop_oneof![Just(b'\r'), Just(b'\n')],
    ) {
        let mut framer = Framer::new();
        let mut mailbox = Mailbox::new();
        prop_assert!(framer.feed_bytes(&wire(&command, &param, terminator), &mut mailbox));

        let frame = mailbox.try_take().unwrap();
        prop_assert_eq!(frame.command(), &command[..]);
        prop_assert_eq!(frame.param(), &param[..]);
    }

    #[test]
    fn long_tokens_are_truncated_not_rejected(
        command in proptest::collection::vec(b'A'..=b'Z', 1..32),
        param in proptest::collection::vec(param_byte(), 0..32),
    ) {
        let mut framer = Framer::new();
        let mut mailbox = Mailbox::new();
        prop_assert!(framer.feed_bytes(&wire(&command, &param, b'\n'), &mut mailbox));

        let frame = mailbox.try_take().unwrap();
        let command_len = command.len().min(MAX_COMMAND_LEN);
        let param_len = param.len().min(MAX_PARAM_LEN);
        prop_assert_eq!(frame.command(), &command[..command_len]);
        prop_assert_eq!(frame.param(), &param[..param_len]);
    }

    #[test]
    fn pending_frame_blocks_later_frames(
        first in proptest::collection::vec(b'A'..=b'Z', 1..=MAX_COMMAND_LEN),
        second in proptest::collection::vec(b'A'..=b'Z', 1..=MAX_COMMAND_LEN),
    ) {
        let mut framer = Framer::new();
        let mut mailbox = Mailbox::new();
        framer.feed_bytes(&wire(&first, b"1", b'\n'), &mut mailbox);
        prop_assert!(!framer.feed_bytes(&wire(&second, b"2", b'\n'), &mut mailbox));

        let frame = mailbox.try_take().unwrap();
        prop_assert_eq!(frame.command(), &first[..]);
        prop_assert_eq!(frame.param(), b"1");
        prop_assert!(mailbox.try_take().is_none());
    }

    #[test]
    fn framer_resynchronizes_after_garbage(
        garbage in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut framer = Framer::new();
        let mut mailbox = Mailbox::new();
        framer.feed_bytes(&garbage, &mut mailbox);
        // A terminator flushes any half-open frame, the next one is clean
        framer.feed(b'\n', &mut mailbox);
        prop_assert_eq!(framer.state(), ParserState::Idle);
        mailbox.clear();
        framer.feed_bytes(b"!QRY#\n", &mut mailbox);

        let frame = mailbox.try_take().unwrap();
        prop_assert_eq!(Command::parse(&frame), Some(Command::Query));
    }
}

#[test]
fn lowercase_command_never_produces_frame() {
    let mut framer = Framer::new();
    let mut mailbox = Mailbox::new();
    framer.feed_bytes(b"!dbg#X10\n", &mut mailbox);
    assert!(!mailbox.is_ready());
    assert_eq!(framer.state(), ParserState::Idle);
}
