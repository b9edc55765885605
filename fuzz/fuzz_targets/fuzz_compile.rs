#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, i64)| {
    use chrono::DateTime;
    use chrono_strftime::{format, Options, Strftime, Timestamp};

    let Some(dt) = DateTime::from_timestamp(data.1 % 253_402_300_800, 0) else { return };
    let ts = Timestamp::from(&dt);
    let one_shot = format(&data.0, &ts, &Options::new());
    match Strftime::new(&data.0) {
        Ok(pattern) => assert_eq!(one_shot.ok(), Some(pattern.render_to_string(&ts))),
        Err(err) => assert_eq!(one_shot.err(), Some(err)),
    }
});
