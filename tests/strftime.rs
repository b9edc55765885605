use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_strftime::{format, DirectiveTable, Error, Options, Renderer, Strftime, Timestamp};

/// 2009-11-10T23:00:00Z
fn reference() -> Timestamp {
    Timestamp::from(&Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap())
}

fn compile(pattern: &str) -> Strftime {
    Strftime::new(pattern).unwrap_or_else(|e| panic!("{:?} failed to compile: {}", pattern, e))
}

/// A spread of dates around year, week and month boundaries.
fn sample_datetimes() -> Vec<DateTime<Utc>> {
    let mut dts = Vec::new();
    let mut dt = Utc.with_ymd_and_hms(1999, 12, 25, 0, 0, 0).unwrap();
    while dt.year() < 2013 {
        dts.push(dt);
        dt += Duration::hours(97) + Duration::minutes(13) + Duration::seconds(7);
    }
    dts
}

#[test]
fn test_reference_scenarios() {
    let ts = reference();
    assert_eq!(compile("%Y-%m-%d").render_to_string(&ts), "2009-11-10");
    assert_eq!(compile("%H:%M:%S").render_to_string(&ts), "23:00:00");
    assert_eq!(compile("100%%").render_to_string(&ts), "100%");
    assert_eq!(Strftime::new("%").unwrap_err(), Error::StrayEscape);
    assert_eq!(Strftime::new("%Q").unwrap_err().directive(), Some('Q'));
}

#[test]
fn test_literal_passthrough() {
    let other = Timestamp::from(&Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    for text in ["no directives here", "", " \t\n", "日付 & ünïcödé", "{} $1 \\n"] {
        let pattern = compile(text);
        assert_eq!(pattern.render_to_string(&reference()), text);
        assert_eq!(pattern.render_to_string(&other), text);
        assert_eq!(format(text, &other, &Options::new()).unwrap(), text);
    }
}

#[test]
fn test_stray_escape() {
    for pattern in ["%", "abc%", "%Y%", "%%%", "日付%"] {
        assert_eq!(Strftime::new(pattern).unwrap_err(), Error::StrayEscape, "{:?}", pattern);
        assert_eq!(
            format(pattern, &reference(), &Options::new()).unwrap_err(),
            Error::StrayEscape,
            "{:?}",
            pattern
        );
    }
}

#[test]
fn test_unknown_directive() {
    let cases = [("%Q", 'Q'), ("x%Kx", 'K'), ("%Y%0", '0'), ("%ä", 'ä'), ("% ", ' ')];
    for (pattern, directive) in cases {
        match Strftime::new(pattern) {
            Err(Error::UnknownDirective { directive: d, source }) => {
                assert_eq!(d, directive);
                assert_eq!(source.key, directive);
            }
            other => panic!("{:?} gave {:?}", pattern, other),
        }
        let err = format(pattern, &reference(), &Options::new()).unwrap_err();
        assert_eq!(err.directive(), Some(directive));
        assert_eq!(err.to_string(), format!("unknown directive `%{}`", directive));
    }
}

#[test]
fn test_agrees_with_chrono() {
    // every directive whose C locale output matches chrono's own formatter
    let pattern = "%Y %C %y %m %b %B %h %d %e %a %A %w %u %U %W %G %g %V %j %D %x %F %v \
                   %H %k %I %l %P %p %M %S %R %T %X %r %c %s %z %Z %t %n %%";
    let compiled = compile(pattern);
    for dt in sample_datetimes() {
        let expected = dt.format(pattern).to_string();
        assert_eq!(compiled.render_to_string(&Timestamp::from(&dt)), expected, "{}", dt);
        assert_eq!(compiled.format(&dt).to_string(), expected, "{}", dt);
        assert_eq!(chrono_strftime::format_datetime(pattern, &dt).unwrap(), expected, "{}", dt);
    }
}

#[test]
fn test_compiling_twice_is_stable() {
    let pattern = "%c | %Z%z | week %U/%W/%V | %%%n";
    let a = compile(pattern);
    let b = Strftime::with_table(pattern, &DirectiveTable::new()).unwrap();
    for dt in sample_datetimes() {
        let ts = Timestamp::from(&dt);
        assert_eq!(a.render_to_string(&ts), b.render_to_string(&ts));
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let pattern = compile("%A, %d %B %Y %I:%M %p");
    let ts = reference();
    let first = pattern.render_to_string(&ts);
    assert_eq!(first, "Tuesday, 10 November 2009 11:00 PM");
    for _ in 0..100 {
        assert_eq!(pattern.render_to_string(&ts), first);
    }
}

#[test]
fn test_one_shot_matches_compiled() {
    let options = Options::new().milliseconds('L').microseconds('f');
    let dt = NaiveDate::from_ymd_opt(2009, 11, 10).unwrap().and_hms_micro_opt(23, 0, 0, 123_456);
    let ts = Timestamp::from_utc(dt.unwrap());
    for pattern in ["%T.%L", "%T.%f", "%%L%L%%", "plain", "%F%n%T"] {
        let compiled = Strftime::with_options(pattern, &options).unwrap();
        assert_eq!(format(pattern, &ts, &options).unwrap(), compiled.render_to_string(&ts));
    }
    assert_eq!(format("%T.%L", &ts, &options).unwrap(), "23:00:00.123");
    assert_eq!(format("%T.%f", &ts, &options).unwrap(), "23:00:00.123456");
}

#[test]
fn test_custom_directives() {
    fn weekend(buf: &mut String, ts: &Timestamp) {
        let weekend = ts.date().weekday().number_from_monday() > 5;
        buf.push_str(if weekend { "weekend" } else { "weekday" });
    }

    let options = Options::new()
        .directive('K', Renderer::derived(weekend))
        .directive('Q', "quarter")
        .directive('%', "percent");
    let pattern = Strftime::with_options("%K/%Q/%%", &options).unwrap();
    assert_eq!(pattern.render_to_string(&reference()), "weekday/quarter/percent");

    // the global table is untouched
    assert!(Strftime::new("%K").is_err());
    assert_eq!(compile("%%").render_to_string(&reference()), "%");
}

#[test]
fn test_replacing_the_table() {
    let mut table = DirectiveTable::empty();
    table.set('d', Renderer::literal("DAY")).unwrap();
    let options = Options::new().directive_table(table).unix_seconds('s');
    let pattern = Strftime::with_options("%d@%s", &options).unwrap();
    assert_eq!(pattern.render_to_string(&reference()), "DAY@1257894000");
    assert!(Strftime::with_options("%Y", &options).is_err());
    assert!(Strftime::with_options("%%", &options).is_err());
}

#[test]
fn test_removed_directive() {
    let mut table = DirectiveTable::new();
    assert!(table.remove('c').unwrap().is_some());
    assert_eq!(Strftime::with_table("%c", &table).unwrap_err().directive(), Some('c'));
    assert!(DirectiveTable::global().clone().remove('c').is_err());
}

#[test]
fn test_time_zone_directives() {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let dt = ist.with_ymd_and_hms(2009, 11, 11, 4, 30, 0).unwrap();
    let pattern = compile("%F %T %z (%Z) %s");
    assert_eq!(pattern.format(&dt).to_string(), "2009-11-11 04:30:00 +0530 (+05:30) 1257894000");

    let named = Timestamp::new(dt.naive_local(), ist, "IST");
    assert_eq!(pattern.render_to_string(&named), "2009-11-11 04:30:00 +0530 (IST) 1257894000");
}
