// Copyright 2025 Spotctl Team.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use spotctl::cli::{actions, Action, CliArgs, TerminalConfirmer};
use spotctl::{Credentials, SpotHttpClient};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = CliArgs::parse();

    if let Err(e) = run(args).await {
        println!("\n[ERROR] {}\n", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    // Validate everything before touching credentials or the network.
    let action = Action::from_args(&args)?;

    let credentials =
        Credentials::resolve(args.pipelines.as_deref(), &args.org_type.token_key())?;

    let client = SpotHttpClient::new(&credentials);
    actions::run(action, &client, &TerminalConfirmer, args.pipeline_mode()).await?;
    Ok(())
}
