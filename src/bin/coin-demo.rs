//! Interactive terminal demo: toss a simulated coin and watch the
//! posterior density of its bias sharpen.
//!
//! Commands:
//!   t, toss       toss the coin once
//!   c, clear      forget all tosses
//!   b, bias <v>   set the simulation bias (clamped to [0, 1])
//!   j, json       dump the current snapshot as JSON
//!   q, quit       exit

use std::io::{self, BufRead, Write};

use coin_posterior::{output, CoinExperiment};

fn main() {
    let mut experiment = CoinExperiment::new();

    println!("coin-posterior demo - commands: toss | clear | bias <v> | json | quit");
    render(&experiment);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("t") | Some("toss") => {
                let outcome = experiment.record_toss();
                println!("tossed: {outcome}");
                render(&experiment);
            }
            Some("c") | Some("clear") => {
                experiment.clear();
                render(&experiment);
            }
            Some("b") | Some("bias") => match parts.next().and_then(|v| v.parse::<f64>().ok()) {
                Some(value) => {
                    // The control layer owns clamping; the library only
                    // documents the [0, 1] contract.
                    let clamped = value.clamp(0.0, 1.0);
                    experiment.set_bias(clamped);
                    println!("bias set to {clamped}");
                }
                None => println!("usage: bias <value in [0, 1]>"),
            },
            Some("j") | Some("json") => match output::to_json_pretty(&experiment.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("serialization failed: {err}"),
            },
            Some("q") | Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }
}

fn render(experiment: &CoinExperiment) {
    print!("{}", output::format_snapshot(&experiment.snapshot()));
    println!(
        "bias: {:.2}   (tosses draw heads with this probability)",
        experiment.current_bias()
    );
}
