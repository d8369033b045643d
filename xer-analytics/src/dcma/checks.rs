//! The fourteen DCMA point checks. Each is a pure function of the
//! shared [`CheckContext`]; none depends on another's result.

use std::collections::BTreeMap;

use xer_parse::domain::{Activity, ActivityStatus, RelationshipKind};

use super::{CheckContext, CheckResult, CheckStatus, MAX_OFFENDERS};
use crate::analytics::is_critical;

/// Display label for an offending activity: code when present, else id.
fn label(activity: &Activity) -> String {
    if activity.code.is_empty() {
        activity.id.clone()
    } else {
        activity.code.clone()
    }
}

fn offenders<'a>(items: impl IntoIterator<Item = &'a Activity>) -> Vec<String> {
    items.into_iter().take(MAX_OFFENDERS).map(label).collect()
}

fn result(
    point: u8,
    title: &str,
    description: &str,
    status: CheckStatus,
    metrics: BTreeMap<String, f64>,
    offenders: Vec<String>,
    summary: String,
) -> CheckResult {
    CheckResult {
        point,
        title: title.to_string(),
        description: description.to_string(),
        status,
        metrics,
        offenders,
        summary,
        applicable: true,
    }
}

fn metrics<const N: usize>(pairs: [(&str, f64); N]) -> BTreeMap<String, f64> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Point 1: every activity is tied into the network and the network
/// has explicit start and finish milestones.
pub(crate) fn logic(cx: &CheckContext) -> CheckResult {
    let dangling: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| {
            !cx.has_predecessor.contains(a.id.as_str())
                && !cx.has_successor.contains(a.id.as_str())
        })
        .collect();
    let start_milestones = cx
        .activities
        .iter()
        .filter(|a| {
            a.is_milestone()
                && !cx.has_predecessor.contains(a.id.as_str())
                && cx.has_successor.contains(a.id.as_str())
        })
        .count();
    let finish_milestones = cx
        .activities
        .iter()
        .filter(|a| {
            a.is_milestone()
                && !cx.has_successor.contains(a.id.as_str())
                && cx.has_predecessor.contains(a.id.as_str())
        })
        .count();

    let status = if dangling.is_empty() && start_milestones >= 1 && finish_milestones >= 1 {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    let summary = format!(
        "{} dangling activities, {} start and {} finish milestones",
        dangling.len(),
        start_milestones,
        finish_milestones
    );

    result(
        1,
        "Logic",
        "All activities have predecessors or successors, anchored by start and finish milestones",
        status,
        metrics([
            ("danglingActivities", dangling.len() as f64),
            ("startMilestones", start_milestones as f64),
            ("finishMilestones", finish_milestones as f64),
        ]),
        offenders(dangling),
        summary,
    )
}

/// Point 2: leads (negative lag) obscure the real sequence of work.
pub(crate) fn leads(cx: &CheckContext) -> CheckResult {
    let total = cx.model.relationships.len();
    let leads = cx
        .model
        .relationships
        .iter()
        .filter(|r| r.is_lead())
        .count();
    let pct = CheckContext::offender_pct(leads, total);

    let status = if leads == 0 {
        CheckStatus::Pass
    } else if pct <= cx.thresholds.leads_warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        2,
        "Leads",
        "Relationships should not use negative lag",
        status,
        metrics([
            ("leads", leads as f64),
            ("totalRelationships", total as f64),
            ("leadPct", pct),
        ]),
        Vec::new(),
        format!("{leads} of {total} relationships use a lead ({pct:.1}%)"),
    )
}

/// Point 3: excessive positive lag hides work that should be an
/// activity. Advisory only, never a failure.
pub(crate) fn lags(cx: &CheckContext) -> CheckResult {
    let total = cx.model.relationships.len();
    let lags = cx
        .model
        .relationships
        .iter()
        .filter(|r| r.has_lag())
        .count();
    let pct = CheckContext::offender_pct(lags, total);

    let status = if pct <= cx.thresholds.lags_pass_pct {
        CheckStatus::Pass
    } else {
        CheckStatus::Warning
    };

    result(
        3,
        "Lags",
        "At most 10% of relationships should carry positive lag",
        status,
        metrics([
            ("lags", lags as f64),
            ("totalRelationships", total as f64),
            ("lagPct", pct),
        ]),
        Vec::new(),
        format!("{lags} of {total} relationships carry lag ({pct:.1}%)"),
    )
}

/// Point 4: finish-to-start is the preferred relationship type.
pub(crate) fn relationship_types(cx: &CheckContext) -> CheckResult {
    let total = cx.model.relationships.len();
    let fs = cx
        .model
        .relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::FinishToStart)
        .count();
    let pct = CheckContext::coverage_pct(fs, total);

    let status = if pct >= cx.thresholds.fs_pass_pct {
        CheckStatus::Pass
    } else if pct >= cx.thresholds.fs_warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        4,
        "Relationship types",
        "At least 90% of relationships should be finish-to-start",
        status,
        metrics([
            ("finishToStart", fs as f64),
            ("totalRelationships", total as f64),
            ("finishToStartPct", pct),
        ]),
        Vec::new(),
        format!("{fs} of {total} relationships are finish-to-start ({pct:.1}%)"),
    )
}

/// Point 5: hard constraints override network logic.
pub(crate) fn hard_constraints(cx: &CheckContext) -> CheckResult {
    let soft = ["CS_ALAP", "CS_ASAP"];
    let constrained: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| {
            a.constraint_type
                .as_deref()
                .is_some_and(|c| !soft.contains(&c))
        })
        .collect();
    let total = cx.activities.len();
    let pct = CheckContext::offender_pct(constrained.len(), total);

    let status = if constrained.is_empty() {
        CheckStatus::Pass
    } else if pct <= cx.thresholds.hard_constraint_warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        5,
        "Hard constraints",
        "Activities should not carry date constraints other than ALAP/ASAP",
        status,
        metrics([
            ("hardConstrained", constrained.len() as f64),
            ("totalActivities", total as f64),
            ("hardConstrainedPct", pct),
        ]),
        offenders(constrained.clone()),
        format!(
            "{} of {} activities carry a hard constraint ({pct:.1}%)",
            constrained.len(),
            total
        ),
    )
}

/// Point 6: float above one work-week suggests missing logic.
pub(crate) fn high_float(cx: &CheckContext) -> CheckResult {
    tiered_activity_check(
        cx,
        6,
        "High float",
        "Few activities should have total float above one week (168h)",
        |a| a.total_float_hours > cx.thresholds.high_float_hours,
        cx.thresholds.high_float_pass_pct,
        cx.thresholds.high_float_warn_pct,
        "highFloat",
        "have float above one week",
    )
}

/// Point 7: negative float means the plan cannot meet its dates.
pub(crate) fn negative_float(cx: &CheckContext) -> CheckResult {
    let negative: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| a.total_float_hours < 0.0)
        .collect();

    let status = if negative.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    result(
        7,
        "Negative float",
        "No activity should have negative total float",
        status,
        metrics([
            ("negativeFloat", negative.len() as f64),
            ("totalActivities", cx.activities.len() as f64),
        ]),
        offenders(negative.clone()),
        format!("{} activities have negative float", negative.len()),
    )
}

/// Point 8: very long activities are hard to status accurately.
pub(crate) fn high_duration(cx: &CheckContext) -> CheckResult {
    tiered_activity_check(
        cx,
        8,
        "High duration",
        "Few activities should run longer than six weeks (960h)",
        |a| a.duration_hours > cx.thresholds.high_duration_hours,
        cx.thresholds.high_duration_pass_pct,
        cx.thresholds.high_duration_warn_pct,
        "highDuration",
        "run longer than six weeks",
    )
}

/// Point 9: every activity needs a coherent start/end date pair.
pub(crate) fn invalid_dates(cx: &CheckContext) -> CheckResult {
    let invalid: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| match (a.planned_start(), a.planned_end()) {
            (Some(start), Some(end)) => start > end,
            _ => true,
        })
        .collect();

    let status = if invalid.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    result(
        9,
        "Invalid dates",
        "Activities must have start and end dates in the right order",
        status,
        metrics([
            ("invalidDates", invalid.len() as f64),
            ("totalActivities", cx.activities.len() as f64),
        ]),
        offenders(invalid.clone()),
        format!("{} activities have missing or reversed dates", invalid.len()),
    )
}

/// Point 10: work should be resource-loaded.
pub(crate) fn resource_coverage(cx: &CheckContext) -> CheckResult {
    let with_duration: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| a.duration_hours > 0.0)
        .collect();
    let uncovered: Vec<&Activity> = with_duration
        .iter()
        .copied()
        .filter(|a| cx.model.assignments_for_activity(&a.id).next().is_none())
        .collect();
    let covered = with_duration.len() - uncovered.len();
    let pct = CheckContext::coverage_pct(covered, with_duration.len());

    let status = if pct >= cx.thresholds.resource_pass_pct {
        CheckStatus::Pass
    } else if pct >= cx.thresholds.resource_warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        10,
        "Resources",
        "At least 95% of activities with duration should have resource assignments",
        status,
        metrics([
            ("covered", covered as f64),
            ("withDuration", with_duration.len() as f64),
            ("coveredPct", pct),
        ]),
        offenders(uncovered),
        format!(
            "{covered} of {} activities with duration are resourced ({pct:.1}%)",
            with_duration.len()
        ),
    )
}

/// Point 11: in-progress activities stuck at 0% are stale status.
pub(crate) fn stalled_active(cx: &CheckContext) -> CheckResult {
    let active: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| a.status == ActivityStatus::Active)
        .collect();
    let stalled: Vec<&Activity> = active
        .iter()
        .copied()
        .filter(|a| a.percent_complete == 0.0)
        .collect();
    let pct = CheckContext::offender_pct(stalled.len(), active.len());

    let status = if pct <= cx.thresholds.stalled_pass_pct {
        CheckStatus::Pass
    } else if pct <= cx.thresholds.stalled_warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        11,
        "Incomplete active",
        "Active activities should report progress above 0%",
        status,
        metrics([
            ("stalled", stalled.len() as f64),
            ("activeActivities", active.len() as f64),
            ("stalledPct", pct),
        ]),
        offenders(stalled.clone()),
        format!(
            "{} of {} active activities report no progress ({pct:.1}%)",
            stalled.len(),
            active.len()
        ),
    )
}

/// Point 12: a healthy critical path covers 5-15% of the schedule.
pub(crate) fn critical_path_ratio(cx: &CheckContext) -> CheckResult {
    let total = cx.activities.len();
    let critical = cx.activities.iter().filter(|a| is_critical(a)).count();
    let pct = CheckContext::offender_pct(critical, total);

    let in_band = pct >= cx.thresholds.critical_min_pct && pct <= cx.thresholds.critical_max_pct;
    let status = if total == 0 || in_band {
        CheckStatus::Pass
    } else {
        CheckStatus::Warning
    };

    result(
        12,
        "Critical path ratio",
        "Between 5% and 15% of activities should be critical",
        status,
        metrics([
            ("criticalActivities", critical as f64),
            ("totalActivities", total as f64),
            ("criticalPct", pct),
        ]),
        Vec::new(),
        format!("{critical} of {total} activities are critical ({pct:.1}%)"),
    )
}

/// Point 13: baseline execution index. Needs baseline data the XER
/// export does not carry; recorded as not applicable.
pub(crate) fn baseline_execution(_cx: &CheckContext) -> CheckResult {
    not_applicable(
        13,
        "Baseline execution",
        "Baseline execution index against the approved baseline",
    )
}

/// Point 14: baseline-derived metrics (BEI/CPLI/hit rate). Same
/// baseline requirement as point 13; recorded as not applicable.
pub(crate) fn baseline_metrics(_cx: &CheckContext) -> CheckResult {
    not_applicable(
        14,
        "Baseline metrics",
        "Baseline-dependent schedule performance metrics",
    )
}

fn not_applicable(point: u8, title: &str, description: &str) -> CheckResult {
    CheckResult {
        point,
        title: title.to_string(),
        description: description.to_string(),
        status: CheckStatus::Pass,
        metrics: BTreeMap::new(),
        offenders: Vec::new(),
        summary: "requires baseline data; not evaluated".to_string(),
        applicable: false,
    }
}

/// Shared shape of the pass/warn/fail checks that count offending
/// activities against the full activity set.
#[allow(clippy::too_many_arguments)]
fn tiered_activity_check(
    cx: &CheckContext,
    point: u8,
    title: &str,
    description: &str,
    offends: impl Fn(&Activity) -> bool,
    pass_pct: f64,
    warn_pct: f64,
    metric_key: &str,
    verb: &str,
) -> CheckResult {
    let offending: Vec<&Activity> = cx
        .activities
        .iter()
        .copied()
        .filter(|a| offends(a))
        .collect();
    let total = cx.activities.len();
    let pct = CheckContext::offender_pct(offending.len(), total);

    let status = if pct <= pass_pct {
        CheckStatus::Pass
    } else if pct <= warn_pct {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    result(
        point,
        title,
        description,
        status,
        metrics([
            (metric_key, offending.len() as f64),
            ("totalActivities", total as f64),
            ("offenderPct", pct),
        ]),
        offenders(offending.clone()),
        format!("{} of {total} activities {verb} ({pct:.1}%)", offending.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Thresholds;
    use pretty_assertions::assert_eq;
    use xer_parse::Model;

    fn assess(input: &str) -> Vec<CheckResult> {
        let model = Model::parse(input);
        super::super::run_assessment(&model, "P1", &Thresholds::default()).points
    }

    fn point(points: &[CheckResult], n: u8) -> &CheckResult {
        &points[(n - 1) as usize]
    }

    const WELL_FORMED: &str = "\
%T\tPROJECT
%F\tproj_id\tproj_name
%R\tP1\tPlant
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tstatus_code\ttarget_drtn_hr_cnt\tphys_complete_pct\ttotal_float_hr_cnt\tearly_start_date\tearly_end_date
%R\tMS\tP1\tM000\tStart\tTK_Complete\t0\t100\t40\t2024-01-01\t2024-01-01
%R\tT1\tP1\tA100\tBuild\tTK_Active\t80\t50\t0\t2024-01-01\t2024-01-12
%R\tMF\tP1\tM999\tFinish\tTK_NotStart\t0\t0\t40\t2024-01-12\t2024-01-12
%T\tTASKPRED
%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt
%R\tT1\tMS\tPR_FS\t0
%R\tMF\tT1\tPR_FS\t0
%T\tRSRC
%F\trsrc_id\trsrc_name\trsrc_type
%R\tR1\tCrew\tRT_Labor
%T\tTASKRSRC
%F\ttask_id\trsrc_id\ttarget_qty
%R\tT1\tR1\t80
";

    #[test]
    fn well_formed_schedule_passes_the_network_checks() {
        let points = assess(WELL_FORMED);

        assert_eq!(point(&points, 1).status, CheckStatus::Pass);
        assert_eq!(point(&points, 2).status, CheckStatus::Pass);
        assert_eq!(point(&points, 4).status, CheckStatus::Pass);
        assert_eq!(point(&points, 7).status, CheckStatus::Pass);
        assert_eq!(point(&points, 9).status, CheckStatus::Pass);
        assert_eq!(point(&points, 10).status, CheckStatus::Pass);
        assert_eq!(point(&points, 11).status, CheckStatus::Pass);
    }

    #[test]
    fn dangling_activity_fails_logic() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tLoose milestone\t0\t0
%R\tB\tP1\tB0\tLoose work\t40\t0
";
        let points = assess(input);

        let logic = point(&points, 1);
        assert_eq!(logic.status, CheckStatus::Fail);
        assert_eq!(logic.metrics["danglingActivities"], 2.0);
        assert_eq!(logic.metrics["startMilestones"], 0.0);
        assert!(logic.offenders.contains(&"A0".to_string()));
    }

    #[test]
    fn zero_relationships_is_pass_not_nan() {
        let points = assess(
            "%T\tTASK\n%F\ttask_id\tproj_id\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt\n%R\tA\tP1\tX\t40\t8",
        );

        assert_eq!(point(&points, 2).status, CheckStatus::Pass);
        assert_eq!(point(&points, 3).status, CheckStatus::Pass);
        assert_eq!(point(&points, 4).status, CheckStatus::Pass);
        assert_eq!(point(&points, 4).metrics["finishToStartPct"], 100.0);
    }

    #[test]
    fn leads_warn_then_fail_by_share() {
        let mut input = String::from(
            "%T\tTASKPRED\n%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt\n",
        );
        // 1 lead in 40 relationships = 2.5% → warning.
        for i in 0..40 {
            let lag = if i == 0 { -8 } else { 0 };
            input.push_str(&format!("%R\tS{i}\tP{i}\tPR_FS\t{lag}\n"));
        }
        let points = assess(&input);
        assert_eq!(point(&points, 2).status, CheckStatus::Warning);

        // 4 leads in 10 = 40% → fail.
        let mut input = String::from(
            "%T\tTASKPRED\n%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt\n",
        );
        for i in 0..10 {
            let lag = if i < 4 { -8 } else { 0 };
            input.push_str(&format!("%R\tS{i}\tP{i}\tPR_FS\t{lag}\n"));
        }
        let points = assess(&input);
        assert_eq!(point(&points, 2).status, CheckStatus::Fail);
    }

    #[test]
    fn lags_never_fail_only_warn() {
        let mut input = String::from(
            "%T\tTASKPRED\n%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt\n",
        );
        for i in 0..10 {
            input.push_str(&format!("%R\tS{i}\tP{i}\tPR_FS\t24\n"));
        }
        let points = assess(&input);
        assert_eq!(point(&points, 3).status, CheckStatus::Warning);
    }

    #[test]
    fn relationship_type_mix_warns_below_ninety_pct() {
        let mut input = String::from(
            "%T\tTASKPRED\n%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt\n",
        );
        // 85% FS → warning tier.
        for i in 0..17 {
            input.push_str(&format!("%R\tS{i}\tP{i}\tPR_FS\t0\n"));
        }
        for i in 17..20 {
            input.push_str(&format!("%R\tS{i}\tP{i}\tPR_SS\t0\n"));
        }
        let points = assess(&input);
        assert_eq!(point(&points, 4).status, CheckStatus::Warning);
    }

    #[test]
    fn hard_constraints_ignore_alap_and_asap() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tcstr_type\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tFree\t\t40\t8
%R\tB\tP1\tB0\tSoft\tCS_ALAP\t40\t8
%R\tC\tP1\tC0\tPinned\tCS_MSO\t40\t8
";
        let points = assess(input);

        let constraints = point(&points, 5);
        assert_eq!(constraints.metrics["hardConstrained"], 1.0);
        // 1 of 3 = 33% → fail.
        assert_eq!(constraints.status, CheckStatus::Fail);
        assert_eq!(constraints.offenders, vec!["C0".to_string()]);
    }

    #[test]
    fn negative_float_fails_without_warning_tier() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tLate\t40\t-5
";
        let points = assess(input);
        assert_eq!(point(&points, 7).status, CheckStatus::Fail);
        assert_eq!(point(&points, 7).metrics["negativeFloat"], 1.0);
    }

    #[test]
    fn high_float_and_duration_use_hour_thresholds() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tFloaty\t40\t200
%R\tB\tP1\tB0\tEndless\t1000\t8
";
        let points = assess(input);

        // 1 of 2 = 50% in both cases → fail tier.
        assert_eq!(point(&points, 6).status, CheckStatus::Fail);
        assert_eq!(point(&points, 6).metrics["highFloat"], 1.0);
        assert_eq!(point(&points, 8).status, CheckStatus::Fail);
        assert_eq!(point(&points, 8).metrics["highDuration"], 1.0);
    }

    #[test]
    fn reversed_dates_fail_the_date_check() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tearly_start_date\tearly_end_date\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tBackwards\t2024-02-01\t2024-01-01\t8
%R\tB\tP1\tB0\tDateless\t\t\t8
";
        let points = assess(input);
        assert_eq!(point(&points, 9).status, CheckStatus::Fail);
        assert_eq!(point(&points, 9).metrics["invalidDates"], 2.0);
    }

    #[test]
    fn milestones_do_not_need_resources() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tMilestone only\t0\t8
";
        let points = assess(input);
        // No activities with duration → trivially satisfied.
        assert_eq!(point(&points, 10).status, CheckStatus::Pass);
        assert_eq!(point(&points, 10).metrics["coveredPct"], 100.0);
    }

    #[test]
    fn critical_ratio_out_of_band_warns() {
        let input = "\
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt
%R\tA\tP1\tA0\tOnly\t40\t0
";
        let points = assess(input);
        // 100% critical is far above the 15% band → warning, never fail.
        assert_eq!(point(&points, 12).status, CheckStatus::Warning);
    }

    #[test]
    fn baseline_points_pass_as_not_applicable() {
        let points = assess("");
        for n in [13u8, 14] {
            let p = point(&points, n);
            assert_eq!(p.status, CheckStatus::Pass);
            assert!(!p.applicable);
        }
    }

    #[test]
    fn offender_lists_are_capped() {
        let mut input = String::from(
            "%T\tTASK\n%F\ttask_id\tproj_id\ttask_code\ttask_name\ttarget_drtn_hr_cnt\ttotal_float_hr_cnt\n",
        );
        for i in 0..60 {
            input.push_str(&format!("%R\tT{i}\tP1\tC{i}\tLoose\t40\t-1\n"));
        }
        let points = assess(&input);
        assert_eq!(point(&points, 7).offenders.len(), MAX_OFFENDERS);
        assert_eq!(point(&points, 7).metrics["negativeFloat"], 60.0);
    }
}
