use crate::{
    client::{Client, Resource},
    commands::Commands,
    error::{CliError, Result as CliResult},
    resource_commands::ResourceCommands,
};

use log::info;
use rp_session::{KeyValueStore, SessionManager};
use serde_json::{Value, json};

/// Runs one command against the API and the session, returning the JSON to print.
pub async fn run<S: KeyValueStore>(
    command: Commands,
    client: &Client,
    session: &mut SessionManager<S>,
) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let payload = client.login(&email, &password).await?;
            if !session.login(&payload) {
                return Err(CliError::login_rejected());
            }
            Ok(whoami(session))
        }

        Commands::Signup {
            name,
            email,
            password,
        } => {
            let response = client.signup(&name, &email, &password).await?;
            info!("Signed up {email}; log in to start a session");
            Ok(response)
        }

        Commands::Logout => {
            session.logout();
            Ok(json!({ "authenticated": false }))
        }

        Commands::Whoami => Ok(whoami(session)),

        Commands::Token => session
            .credential()
            .map(|token| Value::String(token.to_string()))
            .ok_or_else(CliError::not_logged_in),

        Commands::Techniques { action } => {
            run_resource(Resource::Techniques, action, client, session).await
        }
        Commands::Mistakes { action } => {
            run_resource(Resource::Mistakes, action, client, session).await
        }
        Commands::Solutions { action } => {
            run_resource(Resource::Solutions, action, client, session).await
        }
        Commands::Videos { action } => {
            run_resource(Resource::Videos, action, client, session).await
        }
        Commands::Screenshots { action } => {
            run_resource(Resource::Screenshots, action, client, session).await
        }
    }
}

async fn run_resource<S: KeyValueStore>(
    resource: Resource,
    action: ResourceCommands,
    client: &Client,
    session: &SessionManager<S>,
) -> CliResult<Value> {
    let credential = session.credential();

    let value = match action {
        ResourceCommands::List => client.list(resource, credential).await?,
        ResourceCommands::Create { data } => {
            let body = parse_data(&data)?;
            client.create(resource, &body, credential).await?
        }
        ResourceCommands::Update { id, data } => {
            let body = parse_data(&data)?;
            client.update(resource, &id, &body, credential).await?
        }
        ResourceCommands::Delete { id } => client.delete(resource, &id, credential).await?,
    };

    Ok(value)
}

fn parse_data(data: &str) -> CliResult<Value> {
    serde_json::from_str(data).map_err(CliError::invalid_data)
}

/// Session summary without the credential.
fn whoami<S: KeyValueStore>(session: &SessionManager<S>) -> Value {
    match session.current_identity() {
        Some(identity) => json!({
            "authenticated": true,
            "subjectId": identity.subject_id,
            "displayName": identity.display_name,
            "email": identity.email,
        }),
        None => json!({ "authenticated": false }),
    }
}
