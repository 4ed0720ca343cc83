use clap::{Arg, ArgAction};

use admin_claims::gcp::api::{set_user_claims, IdentityToolkitApi};
use admin_claims::gcp::claims::Claims;

#[tokio::main]
async fn main() {
    env_logger::init();
    let matches = clap::Command::new("set-admin")
        .version("1.0.0")
        .about("Set custom claims on a Firebase Auth user")
        .arg(Arg::new("uid").required(true).help("Target user uid"))
        .arg(
            Arg::new("credentials")
                .short('c')
                .long("credentials")
                .default_value("./serviceAccountKey.json")
                .help("Path to the service account key file"),
        )
        .arg(
            Arg::new("claim")
                .short('C')
                .long("claim")
                .action(ArgAction::Append)
                .default_value("admin=true")
                .help("Claim to set, as key=value (repeatable)"),
        )
        .get_matches();

    let uid = matches.get_one::<String>("uid").unwrap();
    let credentials = matches.get_one::<String>("credentials").unwrap();
    let claims = matches
        .get_many::<String>("claim")
        .unwrap()
        .map(|claim| claim.as_str());
    let claims = match Claims::from_args(claims) {
        Ok(claims) => claims,
        Err(error) => {
            eprintln!("Error setting custom claims: {error}");
            std::process::exit(1);
        }
    };

    let result = match IdentityToolkitApi::default(credentials).await {
        Ok(api) => set_user_claims(&api, uid, &claims).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(local_id) => println!("Custom claims set for user: {local_id}"),
        Err(error) => {
            eprintln!("Error setting custom claims: {error}");
            std::process::exit(1);
        }
    }
}
