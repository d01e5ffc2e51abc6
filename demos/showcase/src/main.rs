use rowbind::{Reader, ReaderBuilder, RowSource};

const CLIENTS: &str = "\
client_id,client_name,age
1,Jose,28
2,Daniel,10
3,Vincent,54
";

#[derive(Debug, Default, rowbind::Record)]
#[allow(dead_code)]
struct Client {
    #[column("client_id")]
    id: u32,
    #[column("client_name")]
    name: String,
    age: u8,
}

fn main() -> rowbind::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = ReaderBuilder::new();
    builder.register::<Client>();

    // Decode the file given on the command line, or the bundled clients
    match std::env::args().nth(1) {
        Some(path) => show(builder.from_path(path)?),
        None => show(builder.from_reader(CLIENTS.as_bytes())),
    }
}

fn show<S: RowSource>(mut reader: Reader<S>) -> rowbind::Result<()> {
    println!("==> reader.headers()");
    println!(" -> {:?}", reader.headers()?);

    println!("==> reader.read_all(&mut clients)");
    let mut clients: Vec<Client> = vec![];
    reader.read_all(&mut clients)?;

    for client in &clients {
        println!(" -> {client:?}");
    }

    Ok(())
}
