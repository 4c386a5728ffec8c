use cosmo::format::FormatRegistry;
use cosmo::kernel::registry::ClassRegistry;
use cosmo::realizations;

/// Prints the available realizations, registered classes and formats.
pub fn list() {
    println!("Realizations:");
    for name in realizations::available() {
        println!("  {name}");
    }

    println!("Classes:");
    for name in ClassRegistry::global().names() {
        println!("  {name}");
    }

    println!("Formats:");
    for name in FormatRegistry::global().names() {
        println!("  {name}");
    }
}
