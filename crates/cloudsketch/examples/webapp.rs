//! Example: A small three-tier web application
//!
//! Auth flows through the web tier to a clustered application layer and
//! down to the database. Rendering opens the image in the system viewer.

use cloudsketch::Diagram;
use cloudsketch::catalog::azure;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut diagram = Diagram::new("githubtest_arch");
    diagram.set_show(true);

    let auth = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure AD Auth");

    // NGINX Web Server, represented by an application gateway
    let nginx = diagram.node(azure::network::APPLICATION_GATEWAY, "NGINX Web Server");

    // Application Layer: TypeScript backend
    let typescript_server = diagram.cluster("Application Layer", |d| {
        d.node(azure::compute::FUNCTION_APPS, "TypeScript Server")
    });

    // Database Layer: MS SQL
    let database = diagram.node(azure::database::SQL_DATABASES, "MS SQL Server");

    // Connections: auth -> web -> app -> db
    diagram.chain(&[auth, nginx, typescript_server, database])?;

    match diagram.render() {
        Ok(path) => println!("rendered {}", path.display()),
        Err(err) => {
            eprintln!("render failed ({err}); DOT source follows:\n");
            println!("{}", diagram.to_dot()?);
        }
    }
    Ok(())
}
