use std::collections::BTreeMap;

use xlogger::{critical, debug, error, fatal, info, warn};

fn fetch_from_server() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("username", "foo bar"),
        ("email", "foo@example.com"),
        ("dob", "10-10-1999"),
    ])
}

fn main() -> Result<(), xlogger::LogError> {
    xlogger::init()?;

    let x = 10;
    info!("This is a INFO log")?;
    debug!("This is a DEBUG log", x)?;
    warn!("This is a WARN log", String::from("Additional parameter"))?;
    critical!("This is a CRITICAL log")?;
    error!("This is a ERROR log")?;
    fatal!("This is a FATAL log")?;

    let pi = 3.145;
    info!("Value of PI =", pi)?;
    debug!("Response from server:", format!("{:?}", fetch_from_server()))?;

    xlogger::destroy()
}
