use std::process;

use snapbump_cli::UserCancelled;

#[tokio::main]
async fn main() {
    if let Err(e) = snapbump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        // a cancelled prompt needs no message
        if e.downcast_ref::<UserCancelled>().is_none() {
            eprintln!("Error: {e:#}");
        }
        process::exit(1);
    }
}
