mod defaults;
mod overrides;
mod resolve;
