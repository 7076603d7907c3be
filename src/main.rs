use std::io::{self, Write};

use nooby_habits::iteration::Model;
use nooby_habits::{algorithms, arrays, flushing, imports, iteration, punning};

fn main() -> io::Result<()> {
    println!("\n[imports]\n");

    imports::bad::greet()?;
    imports::good::greet()?;
    imports::better::greet()?;

    println!("\n[flushing]\n");

    let mut out = io::stdout().lock();
    flushing::bad::print_range(&mut out, 0, 3)?;
    flushing::good::print_range(&mut out, 3, 6)?;
    drop(out);

    println!("\n[iteration]\n");

    let data = [3, 1, 4, 1, 5];
    let mut model = Model::new();
    iteration::good::train_model(&data, &mut model);
    println!("trained on {data:?}: {model}");

    println!("\n[algorithms]\n");

    let data = [-1, -3, -5, 8, 15, -1];
    println!(
        "first positive of {data:?}: {:?}",
        algorithms::good::first_positive(&data)
    );

    println!("\n[arrays]\n");

    println!("sum of 256 ones: {}", arrays::good::sum_of_buffer());

    println!("\n[punning]\n");

    let mut out = io::stdout().lock();
    punning::good::print_bytes(&mut out, &0.123_f32)?;
    punning::better::print_bytes(&mut out, 0.123_f32)?;
    writeln!(out, "inv_sqrt(0.123) ~ {}", punning::better::inv_sqrt(0.123))?;

    Ok(())
}
