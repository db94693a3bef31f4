use archetype_intake::parse_tabular;
use proptest::prelude::*;

const HEADER: &str =
    "Team,Team Perf,Product Perf,Throughput,Instability,Individual Eff,Valuable Work,Friction,Burnout";

fn row() -> impl Strategy<Value = (String, [u8; 8])> {
    ("[A-Za-z][A-Za-z ]{0,12}", prop::array::uniform8(0u8..=8))
}

proptest! {
    #[test]
    fn valid_rows_all_survive_in_order(rows in prop::collection::vec(row(), 1..15)) {
        let mut text = String::from(HEADER);
        for (name, halves) in &rows {
            let cells: Vec<String> = halves.iter().map(|h| (*h as f64 / 2.0).to_string()).collect();
            text.push_str(&format!("\n{},{}", name, cells.join(",")));
        }

        let intake = parse_tabular(&text).unwrap();
        prop_assert_eq!(intake.records.len(), rows.len());
        for (record, (name, halves)) in intake.records.iter().zip(&rows) {
            prop_assert_eq!(&record.name, name.trim());
            let expected: Vec<f64> = halves.iter().map(|h| *h as f64 / 2.0).collect();
            prop_assert_eq!(record.scores.to_array().to_vec(), expected);
        }
    }

    #[test]
    fn truncated_rows_never_produce_records(cut in 1usize..8) {
        let full = ["Alpha", "1", "1", "1", "1", "1", "1", "1", "1"];
        let text = format!("{HEADER}\nGood,2,2,2,2,2,2,2,2\n{}", full[..9 - cut].join(","));
        let intake = parse_tabular(&text).unwrap();
        prop_assert_eq!(intake.records.len(), 1);
        prop_assert_eq!(intake.skipped.len(), 1);
    }
}
