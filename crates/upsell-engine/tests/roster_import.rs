use upsell_engine::upsell::roster::{RosterImportError, RosterSource, StaticRoster};
use upsell_engine::upsell::{attach_score, Priority, SubscriptionPlan};

const HEADER: &str = "id,name,title,company,email,plan,features,login_frequency,feature_depth,ai_assist_usage,team_seats,expansion_signals,last_active,preferred_upgrade,blockers,narrative";

fn roster_csv(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv
}

#[test]
fn bundled_export_imports_and_scores() {
    let roster = StaticRoster::from_reader(&include_bytes!("../roster_sample.csv")[..])
        .expect("bundled roster parses");
    assert_eq!(roster.len(), 4);

    let noor = &roster.users()[0];
    assert_eq!(noor.plan, SubscriptionPlan::Free);
    assert_eq!(noor.features.len(), 2);
    assert_eq!(noor.features[0].name, "AI Assist");
    assert_eq!(noor.features[0].frequency, 12);
    assert_eq!(noor.blockers, vec!["Needs audit logs".to_string()]);

    let grace = &roster.users()[2];
    assert_eq!(
        grace.blockers,
        vec!["Small team".to_string(), "Price sensitive".to_string()]
    );

    let ivan = &roster.users()[3];
    assert!(ivan.features.is_empty());
    assert!(ivan.narrative.is_empty());

    let scored = attach_score(&roster.load().expect("static roster loads"));
    let scores: Vec<f64> = scored.iter().map(|user| user.upsell_score).collect();
    assert_eq!(scores, vec![10.0, 7.7, 2.4, 1.0]);
    assert_eq!(scored[0].priority, Priority::Hot);
    assert_eq!(scored[1].priority, Priority::Warm);
    assert_eq!(scored[3].priority, Priority::Nurture);
}

#[test]
fn plan_names_are_case_insensitive() {
    let csv = roster_csv(&[
        "u-1,Rosa Diaz,Ops,Acme,rosa@acme.example,premium,AI Assist:3,4,0.2,0.1,1,0,today,Enterprise,,",
    ]);
    let roster = StaticRoster::from_reader(csv.as_bytes()).expect("lowercase plan accepted");
    assert_eq!(roster.users()[0].plan, SubscriptionPlan::Premium);
}

#[test]
fn rejects_unknown_plan_with_row_number() {
    let csv = roster_csv(&[
        "u-1,Rosa Diaz,Ops,Acme,rosa@acme.example,Basic,,4,0.2,0.1,1,0,today,Premium,,",
        "u-2,Jake Peralta,Detective,Acme,jake@acme.example,Platinum,,4,0.2,0.1,1,0,today,Premium,,",
    ]);
    let err = StaticRoster::from_reader(csv.as_bytes()).expect_err("unknown plan rejected");
    match err {
        RosterImportError::InvalidPlan { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(source.0, "Platinum");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_fraction_signals_above_one() {
    let csv = roster_csv(&[
        "u-1,Rosa Diaz,Ops,Acme,rosa@acme.example,Basic,,4,1.4,0.1,1,0,today,Premium,,",
    ]);
    let err = StaticRoster::from_reader(csv.as_bytes()).expect_err("out-of-range depth rejected");
    assert!(matches!(err, RosterImportError::InvalidSignal { row: 1, .. }));
}

#[test]
fn rejects_malformed_feature_entries() {
    let csv = roster_csv(&[
        "u-1,Rosa Diaz,Ops,Acme,rosa@acme.example,Basic,AI Assist:lots,4,0.2,0.1,1,0,today,Premium,,",
    ]);
    let err = StaticRoster::from_reader(csv.as_bytes()).expect_err("bad feature count rejected");
    match err {
        RosterImportError::InvalidFeature { row, entry } => {
            assert_eq!(row, 1);
            assert_eq!(entry, "AI Assist:lots");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_missing_preferred_upgrade() {
    let csv = roster_csv(&[
        "u-1,Rosa Diaz,Ops,Acme,rosa@acme.example,Basic,,4,0.2,0.1,1,0,today,,,",
    ]);
    let err = StaticRoster::from_reader(csv.as_bytes()).expect_err("missing upgrade rejected");
    assert!(matches!(
        err,
        RosterImportError::MissingField {
            row: 1,
            field: "preferred_upgrade"
        }
    ));
}

#[test]
fn from_path_reads_export_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "upsell-roster-{}-{}.csv",
        std::process::id(),
        "from-path"
    ));
    std::fs::write(&path, include_bytes!("../roster_sample.csv")).expect("write temp roster");

    let roster = StaticRoster::from_path(&path).expect("roster loads from disk");
    std::fs::remove_file(&path).ok();

    assert_eq!(roster.len(), 4);
    assert_eq!(roster.users()[1].name, "Felix Moreau");
}

#[test]
fn from_path_surfaces_missing_file() {
    let path = std::env::temp_dir().join("upsell-roster-does-not-exist.csv");
    let err = StaticRoster::from_path(&path).expect_err("missing file is an error");
    assert!(matches!(err, RosterImportError::Io(_)));
}
