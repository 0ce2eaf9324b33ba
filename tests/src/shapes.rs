mod compare;
mod integration;
