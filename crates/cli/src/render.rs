use std::fmt::Write;

use liftbook_domain::{
    CatalogExercise, ElapsedTimer, OngoingWorkout, RestTimer, Workout, format_time,
    total_volume_load, volume_per_workout,
};

pub fn workout(workout: &OngoingWorkout, elapsed: &ElapsedTimer, rest: &RestTimer) -> String {
    let mut out = String::new();
    let state = timer_state(elapsed);
    let _ = writeln!(
        out,
        "{}  [{} {state}]",
        workout.name(),
        format_time(elapsed.seconds())
    );
    if workout.is_empty() {
        out.push_str("  No exercises yet.\n");
    }
    for (i, exercise) in workout.exercises().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, exercise.name);
        for (j, set) in exercise.sets.iter().enumerate() {
            let _ = writeln!(out, "       {}) {} x {} kg", j + 1, set.reps, set.weight);
        }
    }
    out.push_str(&rest_timer(rest));
    out
}

pub fn rest_timer(rest: &RestTimer) -> String {
    if rest.is_counting() {
        format!(
            "Rest {} ({:.0}%)\n",
            format_time(rest.remaining()),
            rest.progress()
        )
    } else {
        format!("Rest period {}\n", format_time(*rest.period()))
    }
}

pub fn elapsed_timer(elapsed: &ElapsedTimer) -> String {
    let state = timer_state(elapsed);
    format!("Timer {} ({state})\n", format_time(elapsed.seconds()))
}

fn timer_state(elapsed: &ElapsedTimer) -> &'static str {
    if elapsed.is_running() {
        "running"
    } else {
        "stopped"
    }
}

pub fn catalog(catalog: &[CatalogExercise]) -> String {
    if catalog.is_empty() {
        return String::from("The exercise library is empty.\n");
    }
    catalog.iter().fold(String::new(), |mut out, exercise| {
        let _ = writeln!(
            out,
            "  {:>3}  {}: {}",
            *exercise.id, exercise.name, exercise.description
        );
        out
    })
}

pub fn history(workouts: &[Workout]) -> String {
    if workouts.is_empty() {
        return String::from("No finished workouts.\n");
    }
    let mut out = String::new();
    for (workout, (day, volume)) in workouts.iter().zip(volume_per_workout(workouts)) {
        let _ = writeln!(
            out,
            "  {day}  {}  {} exercises, {} sets, {volume:.1} kg",
            workout.name,
            workout.exercises.len(),
            workout.set_count(),
        );
    }
    let _ = writeln!(out, "Total volume load: {:.1} kg", total_volume_load(workouts));
    out
}
