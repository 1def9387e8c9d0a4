use cadence::input::load_file;
use cadence::pacing::{
    tokenize, DisplayPayload, ManualClock, Pacer, PacerConfig, PacerEvent, PacerState,
};
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_pacing() {
    let test_file = std::env::temp_dir().join("cadence_e2e.txt");
    let content = "The quick brown fox jumps over the lazy dog";

    let mut file = File::create(&test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded = load_file(&test_file).expect("should load file successfully");
    assert_eq!(loaded, content);

    let tokens = tokenize(&loaded);
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[0], "The");
    assert_eq!(tokens[1], "quick");

    let clock = ManualClock::new();
    let mut pacer = Pacer::with_clock(PacerConfig::default(), clock.clone());
    pacer.load(tokens);
    assert_eq!(pacer.state(), PacerState::Ready);

    pacer.start();
    let interval = pacer.tick_interval().as_millis() as u64;
    assert_eq!(interval, 200); // 300 tokens/min, one token per tick

    // Replay the whole document tick by tick
    let mut seen = Vec::new();
    let mut last_progress = 0.0;
    loop {
        clock.advance_ms(interval);
        let events = pacer.poll();
        assert_eq!(events.len(), 1);
        match &events[0] {
            PacerEvent::Display { payload, progress } => {
                assert!(*progress >= last_progress, "progress went backwards");
                last_progress = *progress;
                match payload {
                    DisplayPayload::Focused(split) => {
                        seen.push(format!("{}{}{}", split.prefix, split.pivot, split.suffix));
                    }
                    DisplayPayload::Plain(text) => panic!("unexpected plain chunk: {}", text),
                }
            }
            PacerEvent::Finished => break,
            PacerEvent::Ready => panic!("unexpected ready event"),
        }
    }

    assert_eq!(seen.join(" "), content);
    assert_eq!(last_progress, 1.0);
    assert_eq!(pacer.state(), PacerState::Finished);

    // A fresh start replays from the first token
    pacer.start();
    clock.advance_ms(interval);
    let events = pacer.poll();
    match &events[0] {
        PacerEvent::Display { payload, .. } => assert_eq!(payload.text(), "The"),
        other => panic!("expected a display event, got {:?}", other),
    }

    fs::remove_file(&test_file).unwrap();
}

#[test]
fn end_to_end_chunked_pacing() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::with_clock(PacerConfig::default(), clock.clone());
    pacer.load(tokenize("the quick brown fox jumps"));
    pacer.set_chunk_size(2).unwrap();
    pacer.start();

    let interval = pacer.tick_interval().as_millis() as u64;
    assert_eq!(interval, 400);

    let mut chunks = Vec::new();
    loop {
        clock.advance_ms(interval);
        match pacer.poll().remove(0) {
            PacerEvent::Display { payload, .. } => chunks.push(payload.text()),
            PacerEvent::Finished => break,
            PacerEvent::Ready => panic!("unexpected ready event"),
        }
    }

    assert_eq!(chunks, ["the quick", "brown fox", "jumps"]);
}
