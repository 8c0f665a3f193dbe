use crate::cli::Context;

pub fn execute(ctx: &Context<'_>) {
    ctx.settings.print_config();
}
