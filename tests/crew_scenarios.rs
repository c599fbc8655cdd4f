use std::collections::{HashMap, HashSet};

use u_crew::catalog::RequirementCatalog;
use u_crew::fixture::Roster;
use u_crew::models::{
    CrewType, EmployeeId, JobCategory, Schedule, Weekday, ALWAYS_AVAILABLE, NEVER_AVAILABLE,
};
use u_crew::scheduler::CrewScheduler;

use CrewType::{CertifiedInstaller as Ci, Laborer as Lab, PendingCertification as Pend};

fn canonical_scheduler() -> CrewScheduler {
    let mut scheduler = CrewScheduler::new();
    Roster::canonical()
        .apply(&mut scheduler)
        .expect("canonical roster applies");
    scheduler
}

fn register_buildings(scheduler: &mut CrewScheduler, categories: &[JobCategory]) {
    for (i, &category) in categories.iter().enumerate() {
        scheduler.register_job(format!("Build {i}"), category);
    }
}

fn register_crew(scheduler: &mut CrewScheduler, crew: &[(EmployeeId, CrewType, [bool; 5])]) {
    for &(id, crew_type, availability) in crew {
        scheduler.register_employee(id, crew_type, availability);
    }
}

/// `(job, crew)` pairs placed on a day.
fn day_plan(schedule: &Schedule, day: Weekday) -> Vec<(&str, Vec<EmployeeId>)> {
    schedule
        .day(day)
        .iter()
        .map(|a| (a.job_name.as_str(), a.employee_ids.clone()))
        .collect()
}

fn job_names(schedule: &Schedule, day: Weekday) -> Vec<&str> {
    schedule.day(day).iter().map(|a| a.job_name.as_str()).collect()
}

fn five_buildings() -> Vec<JobCategory> {
    vec![
        JobCategory::TwoStory,
        JobCategory::Commercial,
        JobCategory::TwoStory,
        JobCategory::SingleStory,
        JobCategory::SingleStory,
    ]
}

fn eight_employees() -> Vec<(EmployeeId, CrewType, [bool; 5])> {
    vec![
        (1, Ci, [true, true, true, true, true]),
        (2, Ci, [true, false, true, false, true]),
        (3, Pend, [false, true, false, true, false]),
        (4, Lab, [true, true, true, false, false]),
        (5, Lab, [false, false, false, true, true]),
        (6, Ci, [true, false, true, false, true]),
        (7, Lab, [true, false, true, false, true]),
        (8, Pend, [true, false, true, false, true]),
    ]
}

fn assert_canonical_outcome(schedule: &Schedule) {
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![("Build 0", vec![2, 8]), ("Build 2", vec![1, 7])]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Tuesday),
        vec![
            ("Build 1", vec![6, 2, 10, 3, 8, 7, 5, 4]),
            ("Build 3", vec![1]),
        ]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Wednesday),
        vec![("Build 4", vec![6])]
    );
    assert!(schedule.day(Weekday::Thursday).is_empty());
    assert!(schedule.day(Weekday::Friday).is_empty());
    assert_eq!(schedule.total_jobs(), 5);
}

#[test]
fn canonical_week() {
    let mut scheduler = canonical_scheduler();
    assert_eq!(scheduler.schedule(), 5);
    assert_canonical_outcome(scheduler.snapshot());
    assert!(scheduler.pending_jobs().is_empty());
}

#[test]
fn no_employees_no_buildings() {
    let mut scheduler = CrewScheduler::new();
    assert_eq!(scheduler.schedule(), 0);
    assert!(scheduler.snapshot().is_empty());
}

#[test]
fn no_employees() {
    let mut scheduler = CrewScheduler::new();
    register_buildings(&mut scheduler, &five_buildings());
    assert_eq!(scheduler.schedule(), 0);
    assert!(scheduler.snapshot().is_empty());
    assert_eq!(scheduler.pending_jobs().len(), 5);
}

#[test]
fn no_buildings() {
    let mut scheduler = CrewScheduler::new();
    register_crew(&mut scheduler, &eight_employees());
    assert_eq!(scheduler.schedule(), 0);
    assert!(scheduler.snapshot().is_empty());
}

#[test]
fn all_employees_available_every_day() {
    let mut scheduler = CrewScheduler::new();
    register_buildings(&mut scheduler, &five_buildings());
    let crew: Vec<(EmployeeId, CrewType, [bool; 5])> = [
        (1, Ci),
        (2, Ci),
        (3, Pend),
        (4, Lab),
        (5, Lab),
        (6, Ci),
        (7, Lab),
        (8, Pend),
        (9, Pend),
        (10, Lab),
    ]
    .into_iter()
    .map(|(id, t)| (id, t, ALWAYS_AVAILABLE))
    .collect();
    register_crew(&mut scheduler, &crew);

    scheduler.schedule();
    let schedule = scheduler.snapshot();
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![
            ("Build 0", vec![6, 10]),
            ("Build 2", vec![2, 7]),
            ("Build 3", vec![1]),
        ]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Tuesday),
        vec![
            ("Build 1", vec![6, 2, 9, 8, 10, 7, 5, 4]),
            ("Build 4", vec![1]),
        ]
    );
    assert_eq!(schedule.jobs_per_day(), [3, 2, 0, 0, 0]);
}

#[test]
fn single_crew_type_starves_other_categories() {
    let mut scheduler = CrewScheduler::new();
    register_buildings(&mut scheduler, &five_buildings());
    for id in 1..=10 {
        scheduler.register_employee(id, Ci, ALWAYS_AVAILABLE);
    }

    scheduler.schedule();
    let schedule = scheduler.snapshot();
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![("Build 3", vec![10]), ("Build 4", vec![9])]
    );
    assert_eq!(schedule.total_jobs(), 2);
    let pending: Vec<JobCategory> = scheduler.pending_jobs().iter().map(|j| j.category).collect();
    assert_eq!(
        pending,
        vec![JobCategory::TwoStory, JobCategory::Commercial, JobCategory::TwoStory]
    );
}

#[test]
fn fewer_buildings_than_work_days() {
    let mut scheduler = CrewScheduler::new();
    register_buildings(
        &mut scheduler,
        &[JobCategory::TwoStory, JobCategory::Commercial, JobCategory::TwoStory],
    );
    register_crew(&mut scheduler, &eight_employees());

    scheduler.schedule();
    let schedule = scheduler.snapshot();
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![("Build 0", vec![6, 7]), ("Build 2", vec![2, 4])]
    );
    assert_eq!(schedule.total_jobs(), 2);
    assert_eq!(scheduler.pending_jobs()[0].name, "Build 1");
}

#[test]
fn more_buildings_than_capacity() {
    let categories: Vec<JobCategory> = (0..24)
        .map(|i| {
            if i % 3 == 1 {
                JobCategory::Commercial
            } else {
                JobCategory::TwoStory
            }
        })
        .collect();
    let mut scheduler = CrewScheduler::new();
    register_buildings(&mut scheduler, &categories);
    register_crew(&mut scheduler, &eight_employees());

    assert_eq!(scheduler.schedule(), 11);
    let schedule = scheduler.snapshot();
    let names = |day: Weekday| job_names(schedule, day);
    assert_eq!(names(Weekday::Monday), vec!["Build 0", "Build 2", "Build 3"]);
    assert_eq!(names(Weekday::Tuesday), vec!["Build 5"]);
    assert_eq!(names(Weekday::Wednesday), vec!["Build 6", "Build 8", "Build 9"]);
    assert_eq!(names(Weekday::Thursday), vec!["Build 11"]);
    assert_eq!(names(Weekday::Friday), vec!["Build 12", "Build 14", "Build 15"]);
    assert_eq!(scheduler.pending_jobs().len(), 13);
}

#[test]
fn update_availability_before_schedule() {
    let mut scheduler = canonical_scheduler();
    scheduler
        .update_availability(8, NEVER_AVAILABLE)
        .expect("employee 8 exists");

    assert_eq!(scheduler.schedule(), 4);
    let schedule = scheduler.snapshot();
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![("Build 0", vec![2, 7]), ("Build 2", vec![1, 5])]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Tuesday),
        vec![("Build 3", vec![6]), ("Build 4", vec![2])]
    );
    assert!(schedule.days_for_employee(8).is_empty());
    assert_eq!(scheduler.pending_jobs()[0].name, "Build 1");
}

#[test]
fn update_and_revert_restores_outcome() {
    let mut scheduler = canonical_scheduler();
    scheduler.update_availability(8, NEVER_AVAILABLE).unwrap();
    scheduler.update_availability(8, ALWAYS_AVAILABLE).unwrap();

    scheduler.schedule();
    assert_canonical_outcome(scheduler.snapshot());
}

#[test]
fn repeated_identical_update_is_idempotent() {
    let target = [true, false, true, false, true];

    let mut once = canonical_scheduler();
    once.update_availability(5, target).unwrap();

    let mut twice = canonical_scheduler();
    twice.update_availability(5, target).unwrap();
    twice.update_availability(5, target).unwrap();

    for crew_type in CrewType::ALL {
        for day in Weekday::ALL {
            assert_eq!(
                once.directory().index().pool(crew_type, day),
                twice.directory().index().pool(crew_type, day)
            );
        }
    }
    once.schedule();
    twice.schedule();
    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn revert_moves_employee_to_top_of_stack() {
    // Employee 1 is re-added after 2 and 6, so it is now consumed first.
    let mut scheduler = canonical_scheduler();
    scheduler.update_availability(1, NEVER_AVAILABLE).unwrap();
    scheduler.update_availability(1, ALWAYS_AVAILABLE).unwrap();
    assert_eq!(
        scheduler.directory().index().pool(Ci, Weekday::Monday),
        vec![2, 1]
    );

    scheduler.schedule();
    let schedule = scheduler.snapshot();
    assert_eq!(
        day_plan(schedule, Weekday::Monday),
        vec![("Build 0", vec![1, 8]), ("Build 2", vec![2, 7])]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Tuesday),
        vec![
            ("Build 1", vec![1, 6, 10, 3, 8, 7, 5, 4]),
            ("Build 3", vec![2]),
        ]
    );
    assert_eq!(
        day_plan(schedule, Weekday::Wednesday),
        vec![("Build 4", vec![1])]
    );
}

#[test]
fn everyone_on_strike() {
    let mut scheduler = canonical_scheduler();
    for id in 1..=10 {
        scheduler.update_availability(id, NEVER_AVAILABLE).unwrap();
    }
    assert!(scheduler.directory().index().is_empty());
    assert_eq!(scheduler.schedule(), 0);
    assert!(scheduler.snapshot().is_empty());
    assert_eq!(scheduler.pending_jobs().len(), 5);
}

#[test]
fn pools_shrink_by_exactly_what_was_consumed() {
    let mut scheduler = canonical_scheduler();
    let mut before = HashMap::new();
    for crew_type in CrewType::ALL {
        for day in Weekday::ALL {
            before.insert((crew_type, day), scheduler.available_count(crew_type, day));
        }
    }

    scheduler.schedule();

    let mut consumed: HashMap<(CrewType, Weekday), usize> = HashMap::new();
    for (day, assignment) in scheduler.snapshot().iter() {
        for id in &assignment.employee_ids {
            let crew_type = scheduler.directory().get(*id).unwrap().crew_type;
            *consumed.entry((crew_type, day)).or_insert(0) += 1;
        }
    }
    for ((crew_type, day), size) in before {
        let used = consumed.get(&(crew_type, day)).copied().unwrap_or(0);
        assert_eq!(scheduler.available_count(crew_type, day), size - used);
    }
}

#[test]
fn random_rosters_respect_invariants() {
    let catalog = RequirementCatalog::standard();

    for seed in 0..25 {
        let roster = Roster::random(seed, 18, 14, 0.6);
        let mut scheduler = CrewScheduler::new();
        roster.apply(&mut scheduler).unwrap();
        let placed = scheduler.schedule();

        let schedule = scheduler.snapshot();
        assert_eq!(placed, schedule.total_jobs());
        assert_eq!(placed + scheduler.pending_jobs().len(), roster.jobs.len());

        let category_of: HashMap<&str, JobCategory> = roster
            .jobs
            .iter()
            .map(|j| (j.name.as_str(), j.category))
            .collect();
        let mut placed_names = HashSet::new();

        for day in Weekday::ALL {
            let mut busy = HashSet::new();
            for assignment in schedule.day(day) {
                assert!(
                    placed_names.insert(assignment.job_name.clone()),
                    "seed {seed}: {} placed twice",
                    assignment.job_name
                );

                let mut crew: HashMap<CrewType, usize> = HashMap::new();
                for &id in &assignment.employee_ids {
                    assert!(busy.insert(id), "seed {seed}: {id} double-booked on {day}");
                    let employee = scheduler.directory().get(id).unwrap();
                    assert!(employee.is_available(day));
                    *crew.entry(employee.crew_type).or_insert(0) += 1;
                }

                let category = category_of[assignment.job_name.as_str()];
                let matches_alternative = catalog.alternatives(category).iter().any(|set| {
                    let demand: HashMap<CrewType, usize> = set.demand().into_iter().collect();
                    demand == crew
                });
                assert!(matches_alternative, "seed {seed}: crew {crew:?} for {category}");
            }
        }
    }
}

#[test]
fn second_pass_does_not_reset_output() {
    let mut scheduler = canonical_scheduler();
    scheduler.schedule();
    assert_eq!(scheduler.schedule(), 0);
    assert_canonical_outcome(scheduler.snapshot());
}

#[test]
fn availability_toggle_after_pass_does_not_double_book() {
    let mut scheduler = CrewScheduler::new();
    scheduler.register_job("A", JobCategory::SingleStory);
    scheduler.register_employee(1, Ci, ALWAYS_AVAILABLE);
    assert_eq!(scheduler.schedule(), 1);

    scheduler.update_availability(1, NEVER_AVAILABLE).unwrap();
    scheduler.update_availability(1, ALWAYS_AVAILABLE).unwrap();
    assert_eq!(scheduler.available_count(Ci, Weekday::Monday), 0);

    scheduler.register_job("B", JobCategory::SingleStory);
    assert_eq!(scheduler.schedule(), 1);

    let schedule = scheduler.snapshot();
    assert_eq!(day_plan(schedule, Weekday::Monday), vec![("A", vec![1])]);
    assert_eq!(day_plan(schedule, Weekday::Tuesday), vec![("B", vec![1])]);
    assert_eq!(
        schedule.days_for_employee(1),
        vec![Weekday::Monday, Weekday::Tuesday]
    );
}

#[test]
fn canonical_week_then_toggle_everyone_keeps_days_disjoint() {
    let mut scheduler = canonical_scheduler();
    scheduler.schedule();
    for id in 1..=10 {
        scheduler.update_availability(id, NEVER_AVAILABLE).unwrap();
        scheduler.update_availability(id, ALWAYS_AVAILABLE).unwrap();
    }
    for i in 5..12 {
        scheduler.register_job(format!("Build {i}"), JobCategory::SingleStory);
    }
    scheduler.schedule();

    for day in Weekday::ALL {
        let mut busy = HashSet::new();
        for assignment in scheduler.snapshot().day(day) {
            for &id in &assignment.employee_ids {
                assert!(busy.insert(id), "{id} double-booked on {day}");
            }
        }
    }
}
