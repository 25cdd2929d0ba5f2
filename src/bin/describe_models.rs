use neurotype::registry;

fn main() {
    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");
    let models = registry::all();

    if as_json {
        println!("{}", serde_json::to_string_pretty(models).unwrap());
    } else {
        print!("{}", serde_yaml::to_string(models).unwrap());
    }
}
