use anyhow::{Context, Result};
use prism_query::{Order, QueryConfig, QueryDescriptor, RequestTranslator, SearchRequest, Sort};

/// Query parts collected from the command line
#[derive(Debug, Default)]
pub struct TranslateArgs {
    pub indices: Vec<String>,
    pub types: Vec<String>,
    pub fields: Vec<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
    pub sort: Vec<String>,
}

impl TranslateArgs {
    /// Build a descriptor; `from` and `size` fall back to the default page
    /// independently.
    pub fn to_descriptor(&self) -> Result<QueryDescriptor> {
        let sort = self
            .sort
            .iter()
            .map(|s| Order::parse(s))
            .collect::<prism_query::Result<Sort>>()
            .context("Invalid --sort")?;

        let mut builder = QueryDescriptor::builder()
            .indices(&self.indices)
            .types(&self.types)
            .fields(&self.fields);
        if !sort.is_empty() {
            builder = builder.sort(sort);
        }
        if self.from.is_some() || self.size.is_some() {
            let default = prism_query::DEFAULT_PAGE;
            builder = builder.page(
                self.from.unwrap_or(default.offset() as i64),
                self.size.unwrap_or(default.size() as i64),
            );
        }
        builder.build().context("Invalid page")
    }
}

/// Run translate command: build a descriptor from arguments and print the request
pub fn run_translate(args: &TranslateArgs, config: &QueryConfig, pretty: bool) -> Result<()> {
    let query = args.to_descriptor()?;
    tracing::debug!("Descriptor: {:?}", query);
    let request = RequestTranslator::new(config).translate(&query)?;
    print_request(&request, pretty)
}

pub(crate) fn print_request(request: &SearchRequest, pretty: bool) -> Result<()> {
    let body = if pretty {
        request.body_json_pretty()?
    } else {
        request.body_json()?
    };
    println!("{}", request.path);
    println!("{}", body);
    Ok(())
}
