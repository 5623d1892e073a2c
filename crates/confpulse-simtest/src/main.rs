//! ConfPulse Headless Simulation Harness
//!
//! Validates the generator, tick passes and analytics against a seeded
//! engine. Runs entirely in-process — no timer, no rendering, no UI.
//!
//! Usage:
//!   cargo run -p confpulse-simtest
//!   cargo run -p confpulse-simtest -- --verbose

use confpulse_analytics::forecast::ForecastConfidence;
use confpulse_analytics::rankings::RankMetric;
use confpulse_analytics::trends::CategoryKey;
use confpulse_analytics::AnalyticsService;
use confpulse_core::clock::WallTime;
use confpulse_core::engine::SimEngine;
use confpulse_core::model::{recent_feedback, speaker_name, SessionStatus, RECENT_FEEDBACK_CAP};

// ── Test harness ────────────────────────────────────────────────────────

struct CheckResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> CheckResult {
    CheckResult { name: name.to_string(), passed, detail }
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).expect("logger init");
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== ConfPulse Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Dataset generation
    results.extend(validate_generation(verbose));

    // 2. Tick invariants over a full simulated day
    results.extend(validate_tick_invariants(verbose));

    // 3. Schedule-driven status transitions
    results.extend(validate_status_transitions(verbose));

    // 4. Analytics over live data and boundary inputs
    results.extend(validate_analytics(verbose));

    // 5. Cache behavior
    results.extend(validate_cache(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!("\n=== RESULT: {}/{} passed, {} failed ===", passed, total, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Generation ───────────────────────────────────────────────────────

fn validate_generation(_verbose: bool) -> Vec<CheckResult> {
    let engine = SimEngine::with_seed(42);
    let snap = engine.snapshot();

    let completed = snap.sessions.iter().filter(|s| s.status == SessionStatus::Completed).count();
    let subset_ok = snap.attendees.iter().all(|a| {
        a.attended_sessions.iter().all(|sid| a.registered_sessions.contains(sid))
    });
    let bounds_ok = snap.sessions.iter().all(|s| s.current_attendance <= s.capacity);

    vec![
        check(
            "generation.counts",
            snap.sessions.len() == 15 && snap.speakers.len() == 15 && snap.attendees.len() == 847,
            format!(
                "{} sessions / {} speakers / {} attendees",
                snap.sessions.len(),
                snap.speakers.len(),
                snap.attendees.len()
            ),
        ),
        check("generation.completed_split", completed == 4, format!("{completed} completed")),
        check("generation.attended_subset", subset_ok, "attended ⊆ registered".to_string()),
        check("generation.attendance_bounds", bounds_ok, "attendance within capacity".to_string()),
        check(
            "generation.feedback_present",
            !snap.feedback.is_empty(),
            format!("{} feedback entries", snap.feedback.len()),
        ),
    ]
}

// ── 2. Tick invariants ──────────────────────────────────────────────────

fn validate_tick_invariants(verbose: bool) -> Vec<CheckResult> {
    let mut engine = SimEngine::with_seed(7);
    let mut all_ok = true;
    let mut metric_ok = true;

    for half_hour in 0..20u32 {
        let now = WallTime::new(9 + half_hour / 2, (half_hour % 2) * 30);
        engine.tick_at(now);
        let snap = engine.snapshot();

        if verbose {
            println!(
                "  tick {:>2} @ {:02}:{:02} - active={} attendees={} feedback={}",
                snap.update_count,
                now.hour,
                now.minute,
                snap.metrics.active_sessions,
                snap.metrics.total_attendees,
                snap.metrics.total_feedback
            );
        }

        all_ok &= snap.sessions.iter().all(|s| s.current_attendance <= s.capacity);
        let active =
            snap.sessions.iter().filter(|s| s.status == SessionStatus::Active).count() as u32;
        metric_ok &= snap.metrics.active_sessions == active;
    }

    let final_snap = engine.snapshot();
    vec![
        check("tick.attendance_bounds", all_ok, "held for 20 ticks".to_string()),
        check("tick.active_metric", metric_ok, "metrics track the table".to_string()),
        check(
            "tick.update_count",
            final_snap.update_count == 20,
            format!("{} updates", final_snap.update_count),
        ),
        check(
            "tick.growth",
            final_snap.attendees.len() >= 847,
            format!("{} attendees after day", final_snap.attendees.len()),
        ),
    ]
}

// ── 3. Status transitions ───────────────────────────────────────────────

fn validate_status_transitions(_verbose: bool) -> Vec<CheckResult> {
    let mut engine = SimEngine::with_seed(13);

    // Two passes over end-of-day: everything should finish completed.
    engine.tick_at(WallTime::new(18, 0));
    let mid = engine.snapshot();
    let nothing_upcoming =
        mid.sessions.iter().all(|s| s.status != SessionStatus::Upcoming);
    engine.tick_at(WallTime::new(18, 0));
    let done = engine.snapshot();
    let all_completed = done.sessions.iter().all(|s| s.status == SessionStatus::Completed);

    vec![
        check("status.activation", nothing_upcoming, "no session left upcoming".to_string()),
        check("status.completion", all_completed, "all sessions completed".to_string()),
        check(
            "status.engagement_guard",
            done.metrics.average_engagement == 0.0,
            "no active sessions, average engagement 0".to_string(),
        ),
    ]
}

// ── 4. Analytics ────────────────────────────────────────────────────────

fn validate_analytics(verbose: bool) -> Vec<CheckResult> {
    let engine = SimEngine::with_seed(21);
    let snap = engine.snapshot();
    let mut analytics = AnalyticsService::new();

    let stats = analytics.session_stats(&snap.sessions);
    let top = analytics.top_sessions(&snap.sessions, RankMetric::Attendance, 5);
    let sorted = top.windows(2).all(|w| {
        w[0].session.current_attendance >= w[1].session.current_attendance
    });
    if verbose {
        for ranked in &top {
            println!(
                "  #{} {} ({}) - {} seated",
                ranked.rank,
                ranked.session.title,
                speaker_name(ranked.session.speaker_id, &snap.speakers),
                ranked.session.current_attendance
            );
        }
    }
    let buckets = analytics.attendance_by_hour(&snap.sessions);
    let hours_sorted = buckets.windows(2).all(|w| w[0].hour < w[1].hour);
    let breakdown = analytics.category_breakdown(&snap.sessions, CategoryKey::Track);
    let sentiment = analytics.sentiment_breakdown(&snap.feedback);
    let sentiment_sum =
        sentiment.positive_pct + sentiment.neutral_pct + sentiment.negative_pct;
    let summary =
        analytics.performance_summary(&snap.sessions, &snap.speakers, &snap.attendees);

    let roi = analytics.engagement_roi(&snap.sessions, &snap.feedback);
    let insights = analytics.insights(&snap);
    let priorities_descend =
        insights.windows(2).all(|w| w[0].priority >= w[1].priority);
    let forecast = analytics.predict_attendance(&snap.sessions[14], &snap.sessions);
    let recent_ok = snap.sessions.iter().all(|s| {
        let view = recent_feedback(s.id, &snap.feedback);
        view.len() <= RECENT_FEEDBACK_CAP && view.iter().all(|f| f.session_id == s.id)
    });

    let empty_stats = analytics.session_stats(&[]);
    let empty_top = analytics.top_sessions(&[], RankMetric::Attendance, 5);

    vec![
        check(
            "analytics.stats",
            stats.total == 15 && stats.total_attendees > 0,
            format!("{} sessions, {} attendees seated", stats.total, stats.total_attendees),
        ),
        check("analytics.top_sorted", top.len() == 5 && sorted, "top-5 descending".to_string()),
        check(
            "analytics.hour_buckets",
            !buckets.is_empty() && hours_sorted,
            format!("{} buckets ascending", buckets.len()),
        ),
        check(
            "analytics.breakdown",
            !breakdown.is_empty(),
            format!("{} categories", breakdown.len()),
        ),
        check(
            "analytics.sentiment",
            snap.feedback.is_empty() || (sentiment_sum - 100.0).abs() < 0.5,
            format!("sentiment sums to {sentiment_sum:.1}%"),
        ),
        check(
            "analytics.summary",
            summary.highlights.top_attended.is_some(),
            "summary composed".to_string(),
        ),
        check(
            "analytics.roi",
            (0.0..=100.0).contains(&roi),
            format!("roi score {roi:.1}"),
        ),
        check(
            "analytics.insights",
            priorities_descend,
            format!("{} insights, prioritized", insights.len()),
        ),
        check(
            "analytics.forecast",
            forecast.predicted_attendance <= snap.sessions[14].capacity
                || forecast.confidence == ForecastConfidence::Low,
            format!(
                "predicted {} of {} seats ({} comparables)",
                forecast.predicted_attendance, snap.sessions[14].capacity, forecast.basis_sessions
            ),
        ),
        check(
            "analytics.recent_feedback_view",
            recent_ok,
            "per-session view capped and filtered".to_string(),
        ),
        check(
            "analytics.empty_inputs",
            empty_stats.total == 0 && empty_top.is_empty(),
            "zero-valued results, no panic".to_string(),
        ),
    ]
}

// ── 5. Cache ────────────────────────────────────────────────────────────

fn validate_cache(_verbose: bool) -> Vec<CheckResult> {
    let engine = SimEngine::with_seed(33);
    let sessions = engine.sessions();
    let mut analytics = AnalyticsService::new();

    let first = analytics.session_stats(&sessions);
    let second = analytics.session_stats(&sessions);
    let hit_recorded = analytics.cache_hits() == 1 && analytics.cache_misses() == 1;

    analytics.clear_cache(None);
    let _ = analytics.session_stats(&sessions);
    let recompute_after_clear = analytics.cache_misses() == 2;

    vec![
        check("cache.idempotent_read", first == second && hit_recorded, "one compute, one hit".to_string()),
        check("cache.clear", recompute_after_clear, "clear forces recompute".to_string()),
    ]
}
