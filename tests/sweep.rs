//! End-to-end sweeps against shell-script stand-ins for the benchmark executables.
#![cfg(unix)]

use blas_sweep::{
    config::SweepConfig,
    drivers::{self, routine, RoutineContext, SweepPlan},
    error::SweepError,
    layout::BenchLayout,
    routines::{Routine, LIVE_ROUTINES},
    variant,
};

use std::{fs, os::unix::fs::PermissionsExt, path::Path};

const HOST: &str = "node01";

/// Prints its arguments, one line per invocation.
const ECHO_BENCH: &str = "#!/bin/sh\necho \"$@\"\n";

struct Tree {
    _dir: tempfile::TempDir,
    layout: BenchLayout,
}

fn tree() -> Tree {
    let dir = tempfile::tempdir().unwrap();
    let layout = BenchLayout::new(dir.path());

    fs::write(layout.build_config(), "BLASDIR = /opt/blas/atlas-3.10\n").unwrap();
    fs::write(
        dir.path().join("Makefile.in.atlas"),
        "BLASDIR = /opt/blas/atlas-3.10\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Makefile.in.oclblas"),
        "BLASDIR = /opt/oclblas-1.2\n",
    )
    .unwrap();

    for routine in LIVE_ROUTINES {
        fs::create_dir(layout.routine_dir(routine)).unwrap();
        let exe = layout.executable(routine);
        fs::write(&exe, ECHO_BENCH).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
    }

    Tree { _dir: dir, layout }
}

fn plan(tree: &Tree, max_size: u32, trials: u32, label: &str) -> SweepPlan {
    SweepPlan {
        config: SweepConfig::new(max_size, 16, trials, label).unwrap(),
        inner_trials: 1,
        routines: LIVE_ROUTINES.to_vec(),
        variants: variant::candidates("atlas", "oclblas").to_vec(),
        layout: tree.layout.clone(),
        make: "true".into(),
        host: Some(HOST.into()),
    }
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn standalone_run_accumulates_trials_in_one_file() {
    let tree = tree();
    let build_config = tree.layout.build_config();
    let ctx = RoutineContext {
        layout: &tree.layout,
        build_config: &build_config,
        host: Some(HOST),
    };
    let config = SweepConfig::new(128, 16, 2, "").unwrap();

    let runs = routine::run(Routine::Dgemm, &config, ctx).unwrap();

    assert_eq!(runs.len(), 2);
    for run in &runs {
        assert_eq!(run.args, ["0", "0", "0", "128", "16", "0"]);
    }
    let datdir = tree.layout.output_dir(Routine::Dgemm);
    assert_eq!(files_in(&datdir), ["dgemm_CNN_node01_atlas-3.10.txt"]);
    assert_eq!(
        fs::read_to_string(datdir.join("dgemm_CNN_node01_atlas-3.10.txt")).unwrap(),
        "0 0 0 128 16 0\n0 0 0 128 16 0\n"
    );
}

#[test]
fn repeated_runs_append_to_the_same_file() {
    let tree = tree();
    let build_config = tree.layout.build_config();
    let ctx = RoutineContext {
        layout: &tree.layout,
        build_config: &build_config,
        host: Some(HOST),
    };
    let config = SweepConfig::new(64, 16, 1, "runA").unwrap();

    let first = routine::run(Routine::Sgemm, &config, ctx).unwrap();
    let len_after_first = fs::metadata(&first[0].output).unwrap().len();
    let second = routine::run(Routine::Sgemm, &config, ctx).unwrap();
    let len_after_second = fs::metadata(&second[0].output).unwrap().len();

    assert_eq!(first[0].output, second[0].output);
    assert!(len_after_second > len_after_first);
    assert_eq!(
        files_in(&tree.layout.output_dir(Routine::Sgemm)),
        ["sgemm_CNN_node01_atlas-3.10_runA.txt"]
    );
}

#[test]
fn unlabeled_sweep_builds_default_variant() {
    let tree = tree();

    let report = drivers::sweep(&plan(&tree, 128, 2, ""));

    assert_eq!(report.cycles, ["atlas", "atlas"]);
    // Two cycles, two routines, one run each.
    assert_eq!(report.invocations.len(), 4);

    let dgemm = tree.layout.output_dir(Routine::Dgemm);
    assert_eq!(files_in(&dgemm), ["dgemm_CNN_node01_atlas-3.10.txt"]);
    assert_eq!(
        fs::read_to_string(dgemm.join("dgemm_CNN_node01_atlas-3.10.txt")).unwrap(),
        "0 0 0 128 16 0\n0 0 0 128 16 0\n"
    );

    let sgemm = tree.layout.output_dir(Routine::Sgemm);
    assert_eq!(
        fs::read_to_string(sgemm.join("sgemm_CNN_node01_atlas-3.10.txt")).unwrap(),
        "0 0 0 1152 16 0\n0 0 0 1152 16 0\n"
    );
}

#[test]
fn labeled_sweep_builds_accelerated_variant() {
    let tree = tree();

    let report = drivers::sweep(&plan(&tree, 128, 1, "runA"));

    assert_eq!(report.cycles, ["oclblas"]);
    assert_eq!(
        fs::read_link(tree.layout.build_config()).unwrap(),
        Path::new("Makefile.in.oclblas")
    );
    assert_eq!(
        files_in(&tree.layout.output_dir(Routine::Dgemm)),
        ["dgemm_CNN_node01_oclblas-1.2_runA.txt"]
    );
    assert_eq!(
        files_in(&tree.layout.output_dir(Routine::Sgemm)),
        ["sgemm_CNN_node01_oclblas-1.2_runA.txt"]
    );
    let max_sizes: Vec<_> = report
        .invocations
        .iter()
        .map(|run| run.args[3].as_str())
        .collect();
    assert_eq!(max_sizes, ["128", "1152"]);
}

#[test]
fn inner_trials_repeat_without_rebuilding() {
    let tree = tree();
    let mut plan = plan(&tree, 64, 1, "");
    plan.inner_trials = 3;
    plan.routines = vec![Routine::Dgemm];

    let report = drivers::sweep(&plan);

    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.invocations.len(), 3);
}

#[test]
fn failed_rebuild_does_not_stop_the_sweep() {
    let tree = tree();
    let mut plan = plan(&tree, 64, 1, "");
    plan.make = "false".into();

    let report = drivers::sweep(&plan);

    assert_eq!(report.invocations.len(), 2);
}

#[test]
fn missing_executable_is_recorded_not_fatal() {
    let tree = tree();
    fs::remove_file(tree.layout.executable(Routine::Dgemm)).unwrap();

    let report = drivers::sweep(&plan(&tree, 64, 1, ""));

    assert_eq!(report.invocations.len(), 2);
    assert!(report.invocations[0].status.is_none());
    assert!(report.invocations[1].status.unwrap().success());
    // The result file exists, empty.
    assert_eq!(fs::read_to_string(&report.invocations[0].output).unwrap(), "");
}

#[test]
fn unreadable_build_config_abandons_the_variant() {
    let tree = tree();
    fs::remove_file(tree.layout.root().join("Makefile.in.atlas")).unwrap();

    let report = drivers::sweep(&plan(&tree, 64, 2, ""));

    // Both cycles start, neither benchmarks anything.
    assert_eq!(report.cycles, ["atlas", "atlas"]);
    assert!(report.invocations.is_empty());
}

#[test]
fn unusable_output_dir_skips_only_that_routine() {
    let tree = tree();
    fs::write(tree.layout.output_dir(Routine::Dgemm), "not a directory").unwrap();

    let report = drivers::sweep(&plan(&tree, 64, 1, ""));

    assert_eq!(report.invocations.len(), 1);
    assert!(report.invocations[0]
        .output
        .starts_with(tree.layout.routine_dir(Routine::Sgemm)));
}

#[test]
fn host_name_comes_from_the_platform_when_not_given() {
    let tree = tree();
    let mut plan = plan(&tree, 64, 1, "");
    plan.host = None;
    plan.routines = vec![Routine::Dgemm];
    let host = blas_sweep::utils::hostname().unwrap();

    let report = drivers::sweep(&plan);

    assert_eq!(report.invocations.len(), 1);
    assert_eq!(
        files_in(&tree.layout.output_dir(Routine::Dgemm)),
        [format!("dgemm_CNN_{host}_atlas-3.10.txt")]
    );
}

#[test]
fn unactivatable_variant_is_skipped() {
    let tree = tree();
    // A non-empty directory in place of the active configuration cannot be re-linked.
    fs::remove_file(tree.layout.build_config()).unwrap();
    fs::create_dir(tree.layout.build_config()).unwrap();
    fs::write(tree.layout.build_config().join("keep"), "").unwrap();

    let report = drivers::sweep(&plan(&tree, 64, 2, ""));

    assert_eq!(report.cycles, ["atlas", "atlas"]);
    assert!(report.invocations.is_empty());
    assert!(!tree.layout.output_dir(Routine::Dgemm).exists());
}

#[cfg(target_os = "linux")]
#[test]
fn result_file_write_failure_skips_only_that_routine() {
    let tree = tree();
    let datdir = tree.layout.output_dir(Routine::Dgemm);
    fs::create_dir(&datdir).unwrap();
    let result_file = datdir.join("dgemm_CNN_node01_atlas-3.10.txt");
    std::os::unix::fs::symlink("/dev/full", result_file).unwrap();

    let report = drivers::sweep(&plan(&tree, 64, 1, ""));

    assert_eq!(report.invocations.len(), 1);
    assert!(report.invocations[0].status.unwrap().success());
    assert!(report.invocations[0]
        .output
        .starts_with(tree.layout.routine_dir(Routine::Sgemm)));

    // The same failure surfaces as an error when the routine runs on its own.
    let build_config = tree.layout.build_config();
    let ctx = RoutineContext {
        layout: &tree.layout,
        build_config: &build_config,
        host: Some(HOST),
    };
    let config = SweepConfig::new(64, 16, 1, "").unwrap();
    assert!(matches!(
        routine::run(Routine::Dgemm, &config, ctx),
        Err(SweepError::OutputFile { .. })
    ));
}
