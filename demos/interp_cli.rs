// Reads interpolation nodes from stdin, one per line, as "x,y" or "x,y,dy",
// and prints the Newton divided-difference table followed by the Lagrange,
// Newton and (when every line has a slope) Hermite values at each query
// point given on the command line.
//
//   printf '1,1,2\n2,4,4\n3,9,6\n' | cargo run --example interp_cli -- 2.5 7
//
// Blank lines and lines starting with '#' are ignored.

use std::io::{self, BufRead};
use std::process::ExitCode;

use numana::interp::{Dataset, HermiteInterp, HermitePoint, LagrangeInterp, NewtonInterp, Point};

fn parse_line(line: &str) -> Result<(Point<f64>, Option<f64>), String> {
    // "x,y,dy": the slope is everything after the second comma.
    let (xy, dy) = match line.match_indices(',').nth(1) {
        Some((idx, _)) => (&line[..idx], Some(&line[idx + 1..])),
        None => (line, None),
    };
    let p: Point<f64> = xy.parse().map_err(|e| format!("{e}"))?;
    let dy = match dy {
        Some(s) => Some(s.trim().parse::<f64>().map_err(|e| format!("slope: {e}"))?),
        None => None,
    };
    Ok((p, dy))
}

fn main() -> ExitCode {
    let queries = match std::env::args()
        .skip(1)
        .map(|s| s.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(q) => q,
        Err(e) => {
            eprintln!("query points must be numbers: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut points = Vec::new();
    let mut slopes = Vec::new();
    for (lineno, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("read error: {e}");
                return ExitCode::FAILURE;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok((p, dy)) => {
                points.push(p);
                slopes.push(dy);
            }
            Err(e) => {
                eprintln!("line {}: {e}", lineno + 1);
                return ExitCode::FAILURE;
            }
        }
    }

    let data = match Dataset::from_vec(points) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let newton = match NewtonInterp::new(&data) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("newton: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{newton}");

    let hermite = if slopes.iter().all(Option::is_some) {
        let hp: Vec<HermitePoint<f64>> = data
            .points()
            .iter()
            .zip(&slopes)
            .map(|(p, dy)| HermitePoint::new(p.x, p.y, dy.unwrap_or_default()))
            .collect();
        match HermiteInterp::new(&hp) {
            Ok(h) => Some(h),
            Err(e) => {
                eprintln!("hermite: {e}");
                None
            }
        }
    } else {
        None
    };

    let lagrange = LagrangeInterp::from_dataset(data);

    println!();
    println!("{:>12} {:>16} {:>16} {:>16}", "x", "lagrange", "newton", "hermite");
    for &x in &queries {
        let l = match lagrange.eval(x) {
            Ok(v) => format!("{v:>16.8}"),
            Err(e) => format!("{:>16}", e.to_string()),
        };
        let h = match &hermite {
            Some(h) => format!("{:>16.8}", h.eval(x)),
            None => format!("{:>16}", "-"),
        };
        println!("{x:>12.6} {l} {:>16.8} {h}", newton.eval(x));
    }

    ExitCode::SUCCESS
}
