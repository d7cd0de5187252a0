// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the main entry point of the program. This is what gets compiled to
//! the solve binary.

use std::{path::Path, time::{Duration, Instant}};

use atsp::{BestFirstFringe, Completion, Fringe, LifoFringe, SequentialSolver, Solver, SolverConfig, TspSolution, INF};
use clap::Parser;
use io_utils::read_instance;
use serde_json::json;

mod io_utils;


/// ATSP is a solver based on the branch-and-bound algorithm of Little et al.
/// which finds all the optimal circuits of an asymmetric traveling salesman
/// problem instance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the ATSP instance that needs to be solved.
    instance: String,
    /// Stop at the first optimal circuit instead of enumerating all of them.
    #[clap(short, long)]
    first: bool,
    /// Explore the nodes with the lowest bound first rather than depth first.
    #[clap(long)]
    best_first: bool,
    /// A known bound on the cost of the optimal circuits. Only the circuits
    /// whose cost does not exceed this bound are reported.
    #[clap(short, long)]
    bound: Option<isize>,
    /// Print the outcome as a json object.
    #[clap(short, long)]
    json: bool,
}

fn main() -> Result<(), io_utils::Error> {
    env_logger::init();

    let args = Args::parse();
    let inst = read_instance(&args.instance)?;
    let config = SolverConfig {
        all_optima: !args.first,
        initial_bound: args.bound.unwrap_or(INF),
    };

    let mut lifo = LifoFringe::new();
    let mut best = BestFirstFringe::new();
    let fringe: &mut dyn Fringe = if args.best_first { &mut best } else { &mut lifo };
    let mut solver = SequentialSolver::custom(&inst.matrix, config, fringe);

    let start    = Instant::now();
    let outcome  = solver.minimize();
    let finish   = Instant::now();

    let instance = instance_name(&args.instance);
    let duration = finish - start;
    let tours    = solver.best_solutions();

    if args.json {
        print_json(&instance, inst.nb_cities, outcome, duration, tours);
    } else {
        print_solution(&instance, inst.nb_cities, outcome, duration, tours);
    }
    Ok(())
}
fn print_solution(name: &str, n: usize, completion: Completion, duration: Duration, tours: &[TspSolution]) {
    println!("instance : {name}");
    println!("cities   : {n}");
    println!("status   : {}", status(completion));
    println!("optimum  : {}", objective(completion));
    println!("optima   : {}", completion.nb_optima);
    println!("explored : {}", completion.explored);
    println!("duration : {}", duration.as_secs_f32());
    for tour in tours {
        println!("tour     : {tour}");
    }
}
fn print_json(name: &str, n: usize, completion: Completion, duration: Duration, tours: &[TspSolution]) {
    let tours = tours.iter()
        .map(|t| json!({"cost": t.cost, "tour": t.one_based()}))
        .collect::<Vec<_>>();
    let outcome = json!({
        "instance": name,
        "cities"  : n,
        "status"  : status(completion),
        "optimum" : completion.best_value,
        "optima"  : completion.nb_optima,
        "explored": completion.explored,
        "duration": duration.as_secs_f32(),
        "tours"   : tours,
    });
    println!("{outcome}");
}
fn instance_name<P: AsRef<Path>>(fname: P) -> String {
    let fname = fname.as_ref();
    let name  = fname.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let bench = fname.parent().and_then(|p| p.file_name()).map(|n| n.to_string_lossy());

    match bench {
        Some(bench) => format!("{bench}/{name}"),
        None => name.to_string(),
    }
}
fn objective(completion: Completion) -> String {
    match completion.best_value {
        Some(cost) => cost.to_string(),
        None => "none".to_string(),
    }
}
fn status(completion: Completion) -> &'static str {
    if completion.best_value.is_some() {
        "Proved"
    } else {
        "Infeasible"
    }
}
