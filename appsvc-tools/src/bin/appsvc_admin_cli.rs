// Copyright 2023 The AppSvc CLI Authors
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

use appsvc_tools::appsvc_cli::AppSvcCli;
use appsvc_tools::ui::output::print_error;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = AppSvcCli::parse();
    if let Err(e) = cli.handle().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
