//! End-to-end scenarios over inline XER fixtures.

use xer_analytics::analytics::{
    critical_activities, critical_path_summary, resource_curve, schedule_summary,
};
use xer_analytics::dcma::{run_assessment, CheckStatus};
use xer_analytics::Thresholds;
use xer_parse::Model;

/// One project, a relationless milestone and one zero-float activity.
const TWO_ACTIVITY_FILE: &str = "\
ERMHDR\t19.12
%T\tPROJECT
%F\tproj_id\tproj_short_name\tproj_name
%R\tP1\tDEMO\tDemo project
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tstatus_code\ttarget_drtn_hr_cnt\tphys_complete_pct\ttotal_float_hr_cnt\tearly_start_date\tearly_end_date
%R\tA\tP1\tA000\tKickoff\tTK_NotStart\t0\t0\t40\t2024-01-01\t2024-01-01
%R\tB\tP1\tB000\tBuild\tTK_NotStart\t40\t0\t0\t2024-01-01\t2024-01-08
%E
";

const CURVE_FILE: &str = "\
%T\tPROJECT
%F\tproj_id\tproj_name
%R\tP1\tCurve demo
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tearly_start_date\tearly_end_date
%R\tT1\tP1\tA100\tPour\t2024-06-03 00:00\t2024-06-17 00:00
%T\tRSRC
%F\trsrc_id\trsrc_name\trsrc_type
%R\tR1\tConcrete crew\tRT_Labor
%T\tTASKRSRC
%F\ttask_id\trsrc_id\ttarget_qty\ttarget_cost
%R\tT1\tR1\t70\t7000
";

#[test]
fn two_activity_scenario_matches_expected_analytics() {
    let model = Model::parse(TWO_ACTIVITY_FILE);
    let project = model.first_project().expect("project row present");
    assert_eq!(project.id, "P1");

    let summary = schedule_summary(&model, "P1");
    assert_eq!(summary.total_activities, 2);

    // Only B is critical: float 0. A has float 40 and no driving flag.
    let critical = critical_activities(&model, "P1");
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].id, "B");

    let cp = critical_path_summary(&model, "P1");
    assert_eq!(cp.critical_activities, 1);
    assert_eq!(cp.total_activities, 2);
}

#[test]
fn two_activity_scenario_matches_expected_assessment() {
    let model = Model::parse(TWO_ACTIVITY_FILE);
    let assessment = run_assessment(&model, "P1", &Thresholds::default());

    // Both activities are dangling, so the logic point fails...
    assert_eq!(assessment.points[0].status, CheckStatus::Fail);
    // ...while negative float and high float both pass.
    assert_eq!(assessment.points[6].status, CheckStatus::Pass);
    assert_eq!(assessment.points[5].status, CheckStatus::Pass);

    let s = &assessment.summary;
    assert_eq!(s.total_points, 14);
    assert_eq!(
        s.passed_points + s.failed_points + s.warning_points,
        s.total_points
    );
    assert_eq!(
        s.score,
        (s.passed_points as f64 * 100.0 / 14.0).round() as u8
    );
}

#[test]
fn all_points_passing_scores_one_hundred() {
    // A clean network: start milestone, resourced work, finish
    // milestone, pure finish-to-start logic, one critical activity
    // in a pool sized to keep the critical share inside 5-15%.
    let mut input = String::from(
        "\
%T\tPROJECT
%F\tproj_id\tproj_name
%R\tP1\tClean
%T\tTASK
%F\ttask_id\tproj_id\ttask_code\ttask_name\tstatus_code\ttarget_drtn_hr_cnt\tphys_complete_pct\ttotal_float_hr_cnt\tearly_start_date\tearly_end_date
%R\tMS\tP1\tM000\tStart\tTK_NotStart\t0\t0\t40\t2024-01-01\t2024-01-01
%R\tMF\tP1\tM999\tFinish\tTK_NotStart\t0\t0\t40\t2024-03-01\t2024-03-01
",
    );
    for i in 0..10 {
        let float = if i == 0 { 0 } else { 24 };
        input.push_str(&format!(
            "%R\tT{i}\tP1\tA{i}00\tWork {i}\tTK_NotStart\t40\t0\t{float}\t2024-01-01\t2024-01-08\n"
        ));
    }
    input.push_str("%T\tTASKPRED\n%F\ttask_id\tpred_task_id\tpred_type\tlag_hr_cnt\n");
    for i in 0..10 {
        input.push_str(&format!("%R\tT{i}\tMS\tPR_FS\t0\n"));
        input.push_str(&format!("%R\tMF\tT{i}\tPR_FS\t0\n"));
    }
    input.push_str("%T\tRSRC\n%F\trsrc_id\trsrc_name\trsrc_type\n%R\tR1\tCrew\tRT_Labor\n");
    input.push_str("%T\tTASKRSRC\n%F\ttask_id\trsrc_id\ttarget_qty\n");
    for i in 0..10 {
        input.push_str(&format!("%R\tT{i}\tR1\t40\n"));
    }

    let model = Model::parse(&input);
    let assessment = run_assessment(&model, "P1", &Thresholds::default());

    for point in &assessment.points {
        assert_eq!(
            point.status,
            CheckStatus::Pass,
            "point {} ({}) should pass: {}",
            point.point,
            point.title,
            point.summary
        );
    }
    assert_eq!(assessment.summary.score, 100);
    assert_eq!(assessment.summary.grade, 'A');
}

#[test]
fn curve_conserves_quantity_and_splits_the_two_week_span() {
    let model = Model::parse(CURVE_FILE);
    let curve = resource_curve(&model, "R1").expect("known resource");

    assert_eq!(curve.resource.as_ref().map(|r| r.name.as_str()), Some("Concrete crew"));
    assert_eq!(curve.time_based_data.len(), 2);

    for bucket in &curve.time_based_data {
        assert!((bucket.weekly_target_qty - 35.0).abs() < 1e-6);
        assert!((bucket.weekly_target_cost - 3500.0).abs() < 1e-6);
    }

    let total: f64 = curve
        .time_based_data
        .iter()
        .map(|b| b.weekly_target_qty)
        .sum();
    assert!((total - 70.0).abs() / 70.0 < 1e-6);
}

#[test]
fn no_project_is_an_explicit_empty_result() {
    let model = Model::parse("%T\tRSRC\n%F\trsrc_id\trsrc_name\n%R\tR1\tCrew");
    assert!(model.first_project().is_none());

    // Analytics still run against the absent project id.
    let summary = schedule_summary(&model, "P1");
    assert_eq!(summary.total_activities, 0);
    let assessment = run_assessment(&model, "P1", &Thresholds::default());
    assert_eq!(assessment.points.len(), 14);
}
