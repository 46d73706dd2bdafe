//! Command line definition

use clap::{Args, Parser, Subcommand};
use sso_shared::constants::DEFAULT_PAGE_SIZE;
use sso_shared::{PageBase, PageRequest};

#[derive(Parser, Debug)]
#[command(
    name = "sso-console",
    version,
    about = "SFCore SSO - admin console for the identity backend"
)]
pub struct Cli {
    /// Backend base URL, overrides `api.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = "SSO_CONSOLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the signed-in operator
    Whoami,

    /// Print the sidebar navigation
    Nav {
        /// Highlight the entry matching this route
        #[arg(long)]
        current: Option<String>,
    },

    /// Print the dashboard cards
    Dashboard,

    /// Menu management
    Menus {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// User management
    Users {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Registered OAuth2 clients
    Clients {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    List(ListArgs),

    /// Delete a menu after retyping its name
    Delete {
        id: String,

        /// Skip the retype prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListAction {
    List(ListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Page number, counted from 1 regardless of the endpoint
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,

    #[arg(long)]
    pub keyword: Option<String>,
}

impl ListArgs {
    pub fn to_request(&self, base: PageBase) -> PageRequest {
        let request = PageRequest::new(base.from_display(self.page), self.size);
        match &self.keyword {
            Some(keyword) => request.with_keyword(keyword.as_str()),
            None => request,
        }
    }
}
