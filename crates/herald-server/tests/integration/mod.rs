mod endpoints;
mod pages;
