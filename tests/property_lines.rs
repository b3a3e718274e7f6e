use proptest::prelude::*;

use cabrillo::{parser::parse, types::ParseMode};

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,10}[A-Za-z0-9]"
}

fn callsign_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{2,6}"
}

fn qso_line(callsign: &str, serial: usize) -> String {
    format!("QSO: 14025 CW 2013-06-08 1805 W8UPD 599 {serial:03} {callsign} 599 001")
}

proptest! {
    #[test]
    fn multi_valued_keys_collect_every_line_in_order(values in prop::collection::vec(value_strategy(), 1..40)) {
        let text: String = values
            .iter()
            .map(|v| format!("SOAPBOX: {v}\n"))
            .collect();

        let log = parse(&text, ParseMode::Strict).expect("parse");
        prop_assert_eq!(&log.soapbox, &values);
    }

    #[test]
    fn single_valued_keys_keep_only_the_last_value(values in prop::collection::vec(callsign_strategy(), 2..10)) {
        let text: String = values
            .iter()
            .map(|v| format!("CALLSIGN: {v}\n"))
            .collect();

        let log = parse(&text, ParseMode::Strict).expect("parse");
        prop_assert_eq!(log.callsign.as_deref(), values.last().map(String::as_str));
    }

    #[test]
    fn every_well_formed_qso_line_yields_one_record(calls in prop::collection::vec(callsign_strategy(), 1..120)) {
        let mut text = String::from("START-OF-LOG: 3.0\nCONTEST: CQ-WW-CW\n");
        for (i, call) in calls.iter().enumerate() {
            text.push_str(&qso_line(call, i + 1));
            text.push('\n');
        }

        let log = parse(&text, ParseMode::Strict).expect("parse");
        prop_assert_eq!(log.qsos.len(), calls.len());
        for (qso, call) in log.qsos.iter().zip(&calls) {
            prop_assert_eq!(qso.exchange.received.callsign.as_deref(), Some(call.as_str()));
        }
    }

    #[test]
    fn comment_lines_never_change_the_result(
        comments in prop::collection::vec(value_strategy(), 1..10),
        positions in prop::collection::vec(0usize..6, 1..10),
    ) {
        let base_lines = [
            "START-OF-LOG: 3.0",
            "CALLSIGN: W8UPD",
            "CONTEST: NEQP",
            "SOAPBOX: hello",
            "QSO: 14325 PH 2013-06-08 1805 N8SQL 59 001 KG4SGP 59 HARCT",
        ];
        let mut lines: Vec<String> = base_lines.iter().map(|l| l.to_string()).collect();
        for (comment, pos) in comments.iter().zip(&positions) {
            let marker = if pos % 2 == 0 { "#" } else { "//" };
            let at = pos % (lines.len() + 1);
            lines.insert(at, format!("{marker} {comment}"));
        }

        let with_comments = parse(&lines.join("\n"), ParseMode::Strict).expect("parse");
        let without = parse(&base_lines.join("\n"), ParseMode::Strict).expect("parse");
        prop_assert_eq!(with_comments, without);
    }
}
