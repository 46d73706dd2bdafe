//! Subcommand handlers

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use sso_client::{ApiClient, AuthService, ClientService, MenuService, UserService};
use sso_core::navigation::{IconTable, MenuTreeDeriver};
use sso_core::viewmodel::{
    presets, ConfirmOutcome, ConfirmationViewModel, DashboardCards, NavigationViewModel,
    NotificationViewModel, ShowOptions,
};
use sso_shared::config::ConsoleConfig;
use sso_shared::utils::mask_email;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::cli::ListArgs;

pub struct Context {
    pub api: ApiClient,
    pub deriver: MenuTreeDeriver,
    pub notifications: NotificationViewModel,
}

impl Context {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(&config.api)?,
            deriver: MenuTreeDeriver::new(IconTable::builtin(), config.navigation.path_prefix.clone()),
            notifications: NotificationViewModel::new(Duration::from_millis(
                config.notification.default_duration_ms,
            )),
        })
    }
}

fn displayed(err: sso_client::ClientError) -> anyhow::Error {
    anyhow!(err.user_message())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    let me = AuthService::new(ctx.api.clone()).me().await.map_err(displayed)?;
    println!("{}", me.username);
    for authority in &me.authorities {
        println!("  {}", authority);
    }
    Ok(())
}

pub async fn nav(ctx: &Context, current: Option<&str>) -> Result<()> {
    let source = Arc::new(AuthService::new(ctx.api.clone()));
    let navigation = NavigationViewModel::new(source, ctx.deriver.clone());
    navigation.refresh().await;

    let snapshot = navigation.snapshot();
    if let Some(error) = &snapshot.error {
        eprintln!("Menu unavailable ({}), showing default navigation", error);
    }
    let active = current.and_then(|path| navigation.active_item(path));
    for item in &snapshot.items {
        let marker = if active.as_ref().map(|a| &a.id) == Some(&item.id) { '*' } else { ' ' };
        println!("{} {:<14} {:<12} {}", marker, item.id, item.icon.name(), item.label);
    }
    Ok(())
}

pub async fn dashboard(ctx: &Context) -> Result<()> {
    let auth = AuthService::new(ctx.api.clone());
    let cards = DashboardCards::load(&auth, &ctx.deriver).await?;
    if cards.is_empty() {
        println!("No menus available");
    }
    for card in cards {
        println!("[{}] {} ({})", card.icon.name(), card.title, card.path);
        if let Some(description) = card.description.as_deref() {
            println!("    {}", description);
        }
    }
    Ok(())
}

pub async fn list_menus(ctx: &Context, args: &ListArgs) -> Result<()> {
    let page = MenuService::new(ctx.api.clone())
        .list(&args.to_request(MenuService::PAGE_BASE))
        .await
        .map_err(displayed)?;
    println!("{} menu(s), page {}", page.total, MenuService::PAGE_BASE.to_display(page.page_num));
    for menu in &page.list {
        println!(
            "{:>6}  {:<9} {:>4}  {:<24} {}",
            menu.menu_id,
            menu.menu_type.as_str(),
            menu.sort_order,
            menu.menu_name,
            menu.menu_path
        );
    }
    Ok(())
}

pub async fn list_users(ctx: &Context, args: &ListArgs) -> Result<()> {
    let page = UserService::new(ctx.api.clone())
        .list(&args.to_request(UserService::PAGE_BASE))
        .await
        .map_err(displayed)?;
    println!("{} user(s), page {}", page.total, UserService::PAGE_BASE.to_display(page.page_num));
    for user in &page.list {
        let email = user.email.as_deref().map(mask_email).unwrap_or_default();
        let status = if user.enabled { "enabled" } else { "disabled" };
        println!("{:>6}  {:<20} {:<28} {}", user.user_id, user.username, email, status);
    }
    Ok(())
}

pub async fn list_clients(ctx: &Context, args: &ListArgs) -> Result<()> {
    let page = ClientService::new(ctx.api.clone())
        .list(&args.to_request(ClientService::PAGE_BASE))
        .await
        .map_err(displayed)?;
    println!("{} client(s), page {}", page.total, ClientService::PAGE_BASE.to_display(page.page_num));
    for client in &page.list {
        println!(
            "{:>6}  {:<20} {:<24} {}",
            client.id,
            client.client_id,
            client.client_name,
            client.authorization_grant_types.join(",")
        );
    }
    Ok(())
}

/// Delete a menu behind a retype-guarded confirmation.
pub async fn delete_menu(ctx: &Context, id: &str, assume_yes: bool) -> Result<()> {
    let menus = MenuService::new(ctx.api.clone());
    let menu = menus.get(id).await.map_err(displayed)?;

    let service = menus.clone();
    let target = menu.menu_id.clone();
    let dialog = ConfirmationViewModel::new();
    dialog.open(presets::permanent_change(&menu.menu_name).on_confirm(move || {
        let service = service.clone();
        let target = target.clone();
        async move {
            service.delete(&target).await.map_err(displayed)?;
            Ok(())
        }
    }));

    let view = dialog.view();
    println!("{}", view.title.unwrap_or_default());
    println!("{}", view.message.unwrap_or_default());

    let expected = view.require_text.unwrap_or_default();
    if assume_yes {
        dialog.set_input(expected);
    } else {
        println!("Type \"{}\" to confirm:", expected);
        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
        dialog.set_input(line.trim_end_matches(['\r', '\n']));
    }

    match dialog.confirm().await {
        ConfirmOutcome::Confirmed => {
            info!("Menu {} deleted", menu.menu_id);
            ctx.notifications.show(
                format!("Menu \"{}\" deleted", menu.menu_name),
                ShowOptions::default(),
            );
            for notification in ctx.notifications.notifications() {
                println!("{}", notification.message);
            }
            Ok(())
        }
        ConfirmOutcome::Failed(message) => {
            dialog.cancel();
            bail!(message)
        }
        ConfirmOutcome::Skipped | ConfirmOutcome::Superseded => {
            dialog.cancel();
            println!("Confirmation text did not match, nothing was deleted");
            Ok(())
        }
    }
}
