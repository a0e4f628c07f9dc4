use crate::infra::{load_roster, InMemoryOutreachOutbox};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use upsell_engine::config::parse_hot_threshold;
use upsell_engine::error::AppError;
use upsell_engine::upsell::outreach::{OutreachDraft, OutreachRequest, OutreachService};
use upsell_engine::upsell::report::{
    build_dashboard, build_user_detail, find_user, DashboardView, UserDetailView,
};
use upsell_engine::upsell::scoring::DEFAULT_HOT_THRESHOLD;
use upsell_engine::upsell::ScoreEngine;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Roster CSV export to score. Defaults to the bundled sample roster.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Minimum score for the hot target list (1-10).
    #[arg(long, value_parser = parse_hot_threshold)]
    pub(crate) threshold: Option<f64>,
    /// Print the dashboard as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OutreachDraftArgs {
    /// Roster id of the user to write to
    #[arg(long)]
    pub(crate) user_id: String,
    /// Roster CSV export to read the user from
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Roster CSV export to drive the demo. Defaults to the bundled sample roster.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        roster_csv,
        threshold,
        json,
    } = args;

    let roster = load_roster(roster_csv.as_deref())?;
    let scored = ScoreEngine::standard().attach_score(roster.users());
    let view = build_dashboard(&scored, threshold.unwrap_or(DEFAULT_HOT_THRESHOLD));

    if json {
        let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_dashboard(&view);
    }
    Ok(())
}

pub(crate) fn run_outreach_draft(args: OutreachDraftArgs) -> Result<(), AppError> {
    let roster = Arc::new(load_roster(args.roster_csv.as_deref())?);
    let service = OutreachService::new(roster, Arc::new(InMemoryOutreachOutbox::default()));
    let draft = service.draft(&args.user_id)?;
    render_draft(&draft);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let roster = Arc::new(load_roster(args.roster_csv.as_deref())?);
    let engine = ScoreEngine::standard();
    let scored = engine.attach_score(roster.users());

    println!("Upsell engine demo");
    let view = build_dashboard(&scored, DEFAULT_HOT_THRESHOLD);
    render_dashboard(&view);

    let Some(spotlight) = view.spotlight.as_ref() else {
        println!("\nNo users at or above the hot threshold; nothing to pitch this week.");
        return Ok(());
    };

    let user = find_user(&scored, &spotlight.user_id)
        .ok_or_else(|| AppError::UnknownUser(spotlight.user_id.clone()))?;
    let detail = build_user_detail(&engine, user);
    render_user_detail(&detail);

    let outbox = Arc::new(InMemoryOutreachOutbox::default());
    let service = OutreachService::with_engine(roster, outbox, engine);
    let record = service.send(OutreachRequest {
        user_id: detail.outreach.user_id.clone(),
        subject: detail.outreach.subject.clone(),
        message: detail.outreach.message.clone(),
    })?;
    println!(
        "\nSimulated send {} to {} at {}",
        record.outreach_id.0,
        record.recipient,
        record.sent_at.format("%Y-%m-%d %H:%M UTC")
    );

    let history = service.history(&record.user_id)?;
    println!("Outbox now holds {} message(s) for {}", history.len(), detail.row.name);
    Ok(())
}

pub(crate) fn render_dashboard(view: &DashboardView) {
    println!("\nWorkspace summary");
    for card in &view.summary_cards {
        println!("- {}: {} ({})", card.label, card.value, card.secondary);
    }

    match &view.spotlight {
        Some(spotlight) => {
            println!("\nSpotlight: {} ({:.1})", spotlight.name, spotlight.upsell_score);
            println!(
                "- {} -> {} | {}% AI assist",
                spotlight.current_plan, spotlight.preferred_upgrade, spotlight.ai_usage_pct
            );
            if let Some(feature) = &spotlight.top_feature {
                println!("- Leading feature: {feature}");
            }
            if !spotlight.narrative.is_empty() {
                println!("- {}", spotlight.narrative);
            }
        }
        None => println!("\nSpotlight: none"),
    }

    if view.hot_targets.is_empty() {
        println!("\nHot targets (>= {:.1}): none", view.hot_threshold);
    } else {
        println!("\nHot targets (>= {:.1})", view.hot_threshold);
        for row in &view.hot_targets {
            println!(
                "- {} | {} | {} | {:.1}",
                row.name, row.company, row.plan_label, row.upsell_score
            );
        }
    }

    if !view.feature_adoption.is_empty() {
        println!("\nFeature adoption");
        for point in &view.feature_adoption {
            println!(
                "- {}: {} uses ({}%)",
                point.name, point.frequency, point.adoption
            );
        }
    }

    println!("\nAll users");
    for row in &view.users {
        let features = row
            .top_features
            .iter()
            .map(|feature| feature.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "- {} ({}) | {} | {:.1} {} | {}% AI | last active {} | {}",
            row.name,
            row.title,
            row.plan_label,
            row.upsell_score,
            row.priority_label,
            row.ai_usage_pct,
            row.last_active,
            if features.is_empty() { "-" } else { features.as_str() }
        );
    }

    if !view.weekly_plays.is_empty() {
        println!("\nWeekly plays");
        for play in &view.weekly_plays {
            println!("- {play}");
        }
    }
}

pub(crate) fn render_user_detail(detail: &UserDetailView) {
    println!(
        "\n{} <{}> | {} at {}",
        detail.row.name, detail.email, detail.row.title, detail.row.company
    );
    println!(
        "Score {:.1} ({}) on {}; weighted {:.2}, plan lift x{:.2}, raw {:.2}",
        detail.row.upsell_score,
        detail.row.priority_label,
        detail.row.plan_label,
        detail.score_breakdown.weighted,
        detail.score_breakdown.plan_multiplier,
        detail.score_breakdown.raw_score
    );

    println!("\nEngagement");
    for metric in &detail.metrics {
        println!("- {}: {} ({})", metric.label, metric.value, metric.description);
    }

    if !detail.blockers.is_empty() {
        println!("\nBlockers");
        for blocker in &detail.blockers {
            println!("- {blocker}");
        }
    }

    render_draft(&detail.outreach);
}

fn render_draft(draft: &OutreachDraft) {
    println!("\nTo: {}", draft.recipient);
    println!("Subject: {}\n", draft.subject);
    println!("{}", draft.message);
}
