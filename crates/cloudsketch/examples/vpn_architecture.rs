//! Example: Azure VM + Logic Apps architecture behind a VPN
//!
//! Users authenticate against Azure AD and reach a frontend VM through a
//! VPN tunnel; the numbered, colored edges trace each step of a request.

use cloudsketch::catalog::{azure, onprem};
use cloudsketch::color::Color;
use cloudsketch::config::{AppConfig, LayoutConfig};
use cloudsketch::style::{LineStyle, Rankdir};
use cloudsketch::{ClusterStyle, Diagram, Edge};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::new(
        LayoutConfig::default().with_direction(Rankdir::TB),
        Default::default(),
    );
    let mut diagram = Diagram::with_config("Azure VM-Logic Apps Architecture with VPN", config);

    // External components
    let users = diagram.node(onprem::client::USERS, "End Users");
    let internet = diagram.node(onprem::network::INTERNET, "Internet");

    // Azure Active Directory (outside the VNet for clarity)
    let aad = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure Active\nDirectory");

    let vpn_gateway = diagram.node(azure::network::VIRTUAL_NETWORK_GATEWAYS, "VPN Gateway");

    // Virtual network with one subnet per tier
    let vnet_style = ClusterStyle::new()
        .with_line_style(LineStyle::Dashed)
        .with_border_color(Color::new("blue")?);
    let (nsg, frontend_vm, logic_app, cosmos_db) =
        diagram.cluster_styled("Azure Virtual Network", vnet_style, |d| {
            let nsg = d.node(
                azure::network::NETWORK_SECURITY_GROUPS,
                "Network Security\nGroup",
            );
            let frontend_vm = d.cluster_styled(
                "Frontend Subnet",
                ClusterStyle::new()
                    .with_line_style(LineStyle::Dashed)
                    .with_border_color(Color::new("green")?),
                |d| d.node(azure::compute::VM, "Frontend VM\n(Web Server)"),
            );
            let logic_app = d.cluster_styled(
                "Backend Subnet",
                ClusterStyle::new()
                    .with_line_style(LineStyle::Dashed)
                    .with_border_color(Color::new("orange")?),
                |d| d.node(azure::integration::LOGIC_APPS, "Logic Apps\n(Backend API)"),
            );
            let cosmos_db = d.cluster_styled(
                "Data Subnet",
                ClusterStyle::new()
                    .with_line_style(LineStyle::Dashed)
                    .with_border_color(Color::new("purple")?),
                |d| d.node(azure::database::COSMOS_DB, "Cosmos DB\n(Database)"),
            );
            Ok::<_, Box<dyn std::error::Error>>((nsg, frontend_vm, logic_app, cosmos_db))
        })?;

    // Azure services outside the VNet
    let key_vault = diagram.node(
        azure::security::KEY_VAULTS,
        "Azure Key Vault\n(Secrets & Certificates)",
    );

    let red = Color::new("red")?;
    let blue = Color::new("blue")?;
    let green = Color::new("green")?;
    let orange = Color::new("orange")?;
    let purple = Color::new("purple")?;

    // User authentication flow
    let step = |label: &str, color: &Color| {
        Edge::new().with_label(label).with_color(color.clone())
    };
    diagram.connect_with(users, aad, step("1. Authentication", &red))?;
    diagram.connect_with(aad, users, step("2. Auth Token", &red))?;

    // User to application flow through the VPN
    diagram.connect_with(users, internet, step("3. HTTPS Request", &blue))?;
    diagram.connect_with(internet, vpn_gateway, step("4. VPN Tunnel", &blue))?;
    diagram.connect_with(vpn_gateway, nsg, step("5. Secure Connection", &blue))?;
    diagram.connect_with(nsg, frontend_vm, step("6. Web Request", &blue))?;

    // Internal application flow
    diagram.connect_with(frontend_vm, logic_app, step("7. API Call", &green))?;
    diagram.connect_with(logic_app, cosmos_db, step("8. Database Query", &orange))?;
    diagram.connect_with(cosmos_db, logic_app, step("9. Data Response", &orange))?;
    diagram.connect_with(logic_app, frontend_vm, step("10. API Response", &green))?;

    // Security and configuration
    let dashed = |label: &str, color: &Color| step(label, color).with_style(LineStyle::Dashed);
    diagram.connect_with(frontend_vm, key_vault, dashed("Get Certificates", &purple))?;
    diagram.connect_with(logic_app, key_vault, dashed("Get Secrets", &purple))?;

    // Authentication for services
    diagram.connect_with(frontend_vm, aad, dashed("Service Auth", &red))?;
    diagram.connect_with(logic_app, aad, dashed("Service Auth", &red))?;
    diagram.connect_with(cosmos_db, aad, dashed("Access Control", &red))?;

    match diagram.render() {
        Ok(path) => println!("rendered {}", path.display()),
        Err(err) => {
            eprintln!("render failed ({err}); DOT source follows:\n");
            println!("{}", diagram.to_dot()?);
        }
    }
    Ok(())
}
