use xlogger::{error, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("xlogger_multi_threaded.xlog");
    xlogger::init_with_file(&path)?;

    let t1 = std::thread::spawn(|| -> Result<(), xlogger::LogError> {
        for i in 0..50 {
            info!("Thread 1: i =", i)?;
        }
        Ok(())
    });
    let t2 = std::thread::spawn(|| -> Result<(), xlogger::LogError> {
        for i in 50..100 {
            warn!("Thread 2: i =", i)?;
        }
        Ok(())
    });
    for i in 100..150 {
        error!("Thread Main: i =", i)?;
    }
    t1.join().expect("thread 1 panicked")?;
    t2.join().expect("thread 2 panicked")?;

    xlogger::destroy()?;

    let lines = std::fs::read_to_string(&path)?.lines().count();
    println!("{lines} lines written to {}", path.display());
    Ok(())
}
