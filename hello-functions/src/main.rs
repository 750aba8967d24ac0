use functions::{
    Blob, Context, HttpRequest, HttpResponse, InputStream, InvocationContext, Message, Out,
    OutSlot, QueueMessage, Request, Response, Timer, TimerRequest,
};
use tracing_subscriber::EnvFilter;

fn say_hello(req: &dyn HttpRequest, ctx: &dyn Context) -> functions::Result<Response> {
    let name = match req.params().get("name") {
        Some(name) => name.clone(),
        None => match req.get_json() {
            Ok(body) => body["name"].as_str().unwrap_or("stranger").to_string(),
            Err(err) if err.is_malformed_content() => {
                return Response::text("Please pass a JSON body").with_status(400);
            }
            Err(err) => return Err(err),
        },
    };

    let mut resp = Response::text(format!("Hello, {}", name));
    resp.headers_mut().insert("X-Invocation-Id", ctx.invocation_id())?;
    Ok(resp)
}

fn audit_order(msg: &dyn QueueMessage, out: &mut dyn Out<String>) -> functions::Result<()> {
    let order = msg.get_json()?;
    let attempt = msg.dequeue_count().unwrap_or(1);
    out.set(format!("order {} (delivery #{})", order["id"], attempt));
    Ok(())
}

fn cleanup(timer: &dyn TimerRequest) -> String {
    if timer.past_due() {
        String::from("Timer is running late")
    } else {
        String::from("Timer is on schedule")
    }
}

fn count_lines(blob: &mut dyn InputStream) -> functions::Result<usize> {
    let mut lines = 0;
    loop {
        let chunk = blob.read(Some(4096))?;
        if chunk.is_empty() {
            return Ok(lines);
        }
        lines += chunk.iter().filter(|b| **b == b'\n').count();
    }
}

fn main() -> functions::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ctx = InvocationContext::from_env()?;
    tracing::info!(function = ctx.function_name(), invocation = ctx.invocation_id(), "invoking");

    match ctx.function_name() {
        "say_hello" => {
            let req = Request::new("GET", "http://localhost:8080/api/say_hello?name=World")?;
            let resp = say_hello(&req, &ctx)?;
            println!("{} {}", resp.status_code(), String::from_utf8_lossy(&resp.get_body()));
        }
        "audit_order" => {
            let msg = Message::new(serde_json::json!({"id": 42}).to_string()).with_dequeue_count(2);
            let mut out: OutSlot<String> = OutSlot::new();
            audit_order(&msg, &mut out)?;
            println!("{}", out.get()?);
        }
        "cleanup" => println!("{}", cleanup(&Timer::new(false))),
        "count_lines" => {
            let mut blob =
                Blob::from_bytes("first\nsecond\nthird\n").with_name("samples/lines.txt");
            println!("{} lines", count_lines(&mut blob)?);
        }
        other => {
            tracing::error!(
                "No function named {} available, available functions are: {}",
                other,
                "say_hello, audit_order, cleanup, count_lines"
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
